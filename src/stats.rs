use crate::models::{Average, Reading, StatsSnapshot};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AveragePeriod {
    SevenDay,
    ThirtyDay,
    AllTime,
}

impl AveragePeriod {
    pub const ALL: [AveragePeriod; 3] = [
        AveragePeriod::SevenDay,
        AveragePeriod::ThirtyDay,
        AveragePeriod::AllTime,
    ];

    pub fn title(self) -> &'static str {
        match self {
            AveragePeriod::SevenDay => "7-Day Average",
            AveragePeriod::ThirtyDay => "30-Day Average",
            AveragePeriod::AllTime => "All-Time Average",
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            AveragePeriod::SevenDay => "seven-day",
            AveragePeriod::ThirtyDay => "thirty-day",
            AveragePeriod::AllTime => "all-time",
        }
    }

    fn pick(self, stats: &StatsSnapshot) -> Option<&Average> {
        match self {
            AveragePeriod::SevenDay => stats.seven_day_avg.as_ref(),
            AveragePeriod::ThirtyDay => stats.thirty_day_avg.as_ref(),
            AveragePeriod::AllTime => stats.all_time_avg.as_ref(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    pub period: AveragePeriod,
    pub pressure_line: String,
    pub pulse_line: String,
}

impl StatCard {
    fn new(period: AveragePeriod, data: Option<&Average>) -> Self {
        let mut card = Self {
            period,
            pressure_line: "--/-- mmHg".to_string(),
            pulse_line: "Pulse: -- bpm".to_string(),
        };
        if let Some(data) = data {
            card.fill(data);
        }
        card
    }

    fn fill(&mut self, data: &Average) {
        self.pressure_line = pressure_line(data);
        self.pulse_line = pulse_line(data);
    }
}

pub fn pressure_line(data: &Average) -> String {
    format!("{}/{} mmHg", data.systolic, data.diastolic)
}

pub fn pulse_line(data: &Average) -> String {
    format!("Pulse: {} bpm", data.pulse)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatsGrid {
    pub cards: Vec<StatCard>,
}

impl StatsGrid {
    pub fn card(&self, period: AveragePeriod) -> Option<&StatCard> {
        self.cards.iter().find(|card| card.period == period)
    }

    fn card_mut(&mut self, period: AveragePeriod) -> Option<&mut StatCard> {
        self.cards.iter_mut().find(|card| card.period == period)
    }
}

/// The `.stats-section` of the page. The grid only exists once a snapshot
/// has been rendered into it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatsSection {
    pub grid: Option<StatsGrid>,
    pub last_reading: Option<Reading>,
}

impl StatsSection {
    pub fn card(&self, period: AveragePeriod) -> Option<&StatCard> {
        self.grid.as_ref().and_then(|grid| grid.card(period))
    }

    pub fn update_stats_display(&mut self, stats: &StatsSnapshot) {
        if let Some(reading) = &stats.last_reading {
            self.last_reading = Some(reading.clone());
        }

        let grid = self.grid.get_or_insert_with(StatsGrid::default);

        if grid.cards.is_empty() && stats.seven_day_avg.is_some() {
            grid.cards = AveragePeriod::ALL
                .iter()
                .map(|&period| StatCard::new(period, period.pick(stats)))
                .collect();
            return;
        }

        for period in AveragePeriod::ALL {
            update_average_card(grid, period, period.pick(stats));
        }
    }
}

fn update_average_card(grid: &mut StatsGrid, period: AveragePeriod, data: Option<&Average>) {
    let Some(data) = data else {
        return;
    };
    if let Some(card) = grid.card_mut(period) {
        card.fill(data);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn avg(systolic: i64, diastolic: i64, pulse: i64) -> Option<Average> {
        Some(Average { systolic, diastolic, pulse })
    }

    fn full_snapshot() -> StatsSnapshot {
        StatsSnapshot {
            last_reading: None,
            seven_day_avg: avg(118, 79, 72),
            thirty_day_avg: avg(122, 81, 70),
            all_time_avg: avg(125, 83, 71),
        }
    }

    #[test]
    fn first_snapshot_creates_three_cards() {
        let mut section = StatsSection::default();
        section.update_stats_display(&full_snapshot());

        let grid = section.grid.as_ref().expect("grid created");
        assert_eq!(grid.cards.len(), 3);
        let titles: Vec<_> = grid.cards.iter().map(|c| c.period.title()).collect();
        assert_eq!(titles, ["7-Day Average", "30-Day Average", "All-Time Average"]);

        let week = section.card(AveragePeriod::SevenDay).unwrap();
        assert_eq!(week.pressure_line, "118/79 mmHg");
        assert_eq!(week.pulse_line, "Pulse: 72 bpm");
    }

    #[test]
    fn repeated_snapshot_is_idempotent() {
        let mut section = StatsSection::default();
        section.update_stats_display(&full_snapshot());
        let first = section.clone();
        section.update_stats_display(&full_snapshot());

        assert_eq!(section, first);
        assert_eq!(section.grid.unwrap().cards.len(), 3);
    }

    #[test]
    fn missing_average_leaves_previous_card_text() {
        let mut section = StatsSection::default();
        section.update_stats_display(&full_snapshot());

        let partial = StatsSnapshot {
            last_reading: None,
            seven_day_avg: avg(130, 85, 75),
            thirty_day_avg: None,
            all_time_avg: avg(126, 84, 72),
        };
        section.update_stats_display(&partial);

        assert_eq!(
            section.card(AveragePeriod::SevenDay).unwrap().pressure_line,
            "130/85 mmHg"
        );
        let month = section.card(AveragePeriod::ThirtyDay).unwrap();
        assert_eq!(month.pressure_line, "122/81 mmHg");
        assert_eq!(month.pulse_line, "Pulse: 70 bpm");
        assert_eq!(
            section.card(AveragePeriod::AllTime).unwrap().pulse_line,
            "Pulse: 72 bpm"
        );
    }

    #[test]
    fn snapshot_without_weekly_average_creates_grid_but_no_cards() {
        let mut section = StatsSection::default();
        section.update_stats_display(&StatsSnapshot {
            all_time_avg: avg(120, 80, 70),
            ..StatsSnapshot::default()
        });

        assert!(section.grid.as_ref().unwrap().cards.is_empty());
        assert!(section.card(AveragePeriod::AllTime).is_none());
    }

    // The browser form threw here when reading the missing average and showed
    // the generic error; placeholder cards keep all three slots instead.
    #[test]
    fn absent_averages_get_placeholder_cards_on_creation() {
        let mut section = StatsSection::default();
        section.update_stats_display(&StatsSnapshot {
            seven_day_avg: avg(118, 79, 72),
            ..StatsSnapshot::default()
        });

        let month = section.card(AveragePeriod::ThirtyDay).unwrap();
        assert_eq!(month.pressure_line, "--/-- mmHg");
        assert_eq!(month.pulse_line, "Pulse: -- bpm");
    }

    #[test]
    fn last_reading_survives_snapshot_without_one() {
        let reading = Reading {
            id: 9,
            timestamp: None,
            systolic: 121,
            diastolic: 79,
            pulse: 68,
            classification: "Elevated".to_string(),
        };
        let mut section = StatsSection::default();
        section.update_stats_display(&StatsSnapshot {
            last_reading: Some(reading.clone()),
            ..full_snapshot()
        });
        section.update_stats_display(&full_snapshot());

        assert_eq!(section.last_reading, Some(reading));
    }
}
