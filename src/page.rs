use crate::models::SubmissionResult;
use crate::state::IDLE_LABEL;
use crate::stats::StatsSection;

pub const DEFAULT_FIELDS: [&str; 9] = [
    "systolic1",
    "diastolic1",
    "pulse1",
    "systolic2",
    "diastolic2",
    "pulse2",
    "systolic3",
    "diastolic3",
    "pulse3",
];

/// Category shown on every error, whatever went wrong.
pub const ERROR_CATEGORY: &str = "crisis";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: String,
    pub value: String,
}

/// `#readingForm`: named text inputs in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadingForm {
    fields: Vec<FormField>,
}

impl ReadingForm {
    pub fn new<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Self {
        let fields = names
            .into_iter()
            .map(|name| FormField {
                name: name.into(),
                value: String::new(),
            })
            .collect();
        Self { fields }
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|field| (field.name.as_str(), field.value.as_str()))
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .map(|field| field.value.as_str())
    }

    /// Returns false when the form has no field by that name.
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> bool {
        match self.fields.iter_mut().find(|field| field.name == name) {
            Some(field) => {
                field.value = value.into();
                true
            }
            None => false,
        }
    }

    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.iter().all(|field| field.value.is_empty())
    }
}

impl Default for ReadingForm {
    fn default() -> Self {
        Self::new(DEFAULT_FIELDS)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitButton {
    pub disabled: bool,
    pub label: String,
}

impl Default for SubmitButton {
    fn default() -> Self {
        Self {
            disabled: false,
            label: IDLE_LABEL.to_string(),
        }
    }
}

/// `#result`: hidden until the first submission finishes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultPanel {
    pub hidden: bool,
    pub classification_text: String,
    pub category: Option<String>,
    pub recommendation: String,
}

impl Default for ResultPanel {
    fn default() -> Self {
        Self {
            hidden: true,
            classification_text: String::new(),
            category: None,
            recommendation: String::new(),
        }
    }
}

impl ResultPanel {
    pub fn display_result(&mut self, result: &SubmissionResult) {
        self.hidden = false;
        match result {
            SubmissionResult::Failure { error } => {
                self.classification_text = format!("Error: {error}");
                self.category = Some(ERROR_CATEGORY.to_string());
                self.recommendation.clear();
            }
            SubmissionResult::Success(success) => {
                let name = &success.classification.name;
                self.classification_text = format!("Classification: {name}");
                self.category = Some(category_class(name));
                self.recommendation = success.recommendation.clone();
            }
        }
    }
}

/// Lower-cases the classification name and drops its first space only,
/// so "Hypertension Stage 1" maps to "hypertensionstage 1".
pub fn category_class(name: &str) -> String {
    name.to_lowercase().replacen(' ', "", 1)
}

/// Everything the controller touches, handed to it explicitly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    pub form: ReadingForm,
    pub button: SubmitButton,
    pub result: ResultPanel,
    pub stats: StatsSection,
}

impl Page {
    pub fn new(form: ReadingForm) -> Self {
        Self {
            form,
            ..Self::default()
        }
    }
}
