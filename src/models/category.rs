/// The fixed set of timesheet exceptions flagged during payroll review.
///
/// Declaration order matters: it is the order used when a token matches
/// and when the full set is iterated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ExceptionCategory {
    MissedPunch,
    OvertimeHours,
    LongInterval,
    ShortShift,
    ShortLunch,
    MissedLunch,
}

/// Static description of one category: canonical name, sheet column, label.
#[derive(Debug, Clone, Copy)]
pub struct CategoryInfo {
    pub category: ExceptionCategory,
    pub name: &'static str,
    pub column: &'static str,
    pub label: &'static str,
}

static CATEGORY_TABLE: [CategoryInfo; 6] = [
    CategoryInfo {
        category: ExceptionCategory::MissedPunch,
        name: "MISSED_PUNCH",
        column: "MissedPunch",
        label: "Missed Punch",
    },
    CategoryInfo {
        category: ExceptionCategory::OvertimeHours,
        name: "OVERTIME_HOURS",
        column: "OvertimeHours",
        label: "Overtime Hours",
    },
    CategoryInfo {
        category: ExceptionCategory::LongInterval,
        name: "LONG_INTERVAL",
        column: "LongInterval",
        label: "Long Interval",
    },
    CategoryInfo {
        category: ExceptionCategory::ShortShift,
        name: "SHORT_SHIFT",
        column: "ShortShift",
        label: "Short Shift",
    },
    CategoryInfo {
        category: ExceptionCategory::ShortLunch,
        name: "SHORT_LUNCH",
        column: "ShortLunch",
        label: "Short Lunch",
    },
    CategoryInfo {
        category: ExceptionCategory::MissedLunch,
        name: "MISSED_LUNCH",
        column: "MissedLunch",
        label: "Missed Lunch",
    },
];

impl ExceptionCategory {
    /// Every category, in declaration order.
    pub const ALL: [ExceptionCategory; 6] = [
        ExceptionCategory::MissedPunch,
        ExceptionCategory::OvertimeHours,
        ExceptionCategory::LongInterval,
        ExceptionCategory::ShortShift,
        ExceptionCategory::ShortLunch,
        ExceptionCategory::MissedLunch,
    ];

    pub fn info(&self) -> &'static CategoryInfo {
        &CATEGORY_TABLE[*self as usize]
    }

    /// Canonical upper-case name, e.g. `MISSED_PUNCH`.
    pub fn name(&self) -> &'static str {
        self.info().name
    }

    /// Column header used by the payroll review sheet, e.g. `MissedPunch`.
    pub fn column(&self) -> &'static str {
        self.info().column
    }

    /// Human readable label used in report headers.
    pub fn label(&self) -> &'static str {
        self.info().label
    }

    /// Name with underscores removed, lower-cased (`missedpunch`).
    pub fn token(&self) -> String {
        self.name().replace('_', "").to_ascii_lowercase()
    }

    /// Parse a free-text request (usually a mail subject) into the ordered
    /// list of categories to display.
    ///
    /// - the text is split on commas
    /// - every whitespace character inside a token is removed
    /// - each token is compared case-insensitively with [`token`](Self::token)
    /// - duplicates are kept, unknown tokens are dropped
    ///
    /// Falls back to `[MissedPunch]` when nothing matches.
    pub fn parse_requested(text: &str) -> Vec<ExceptionCategory> {
        let mut requested = Vec::new();

        for raw in text.split(',') {
            let token: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
            if token.is_empty() {
                continue;
            }

            for category in Self::ALL {
                if category.token().eq_ignore_ascii_case(&token) {
                    requested.push(category);
                }
            }
        }

        if requested.is_empty() {
            requested.push(ExceptionCategory::MissedPunch);
        }

        requested
    }
}

impl std::fmt::Display for ExceptionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
