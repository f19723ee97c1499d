use std::collections::BTreeMap;

/// Department code → friendly name lookup used to label report lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentNames {
    names: BTreeMap<String, String>,
}

/// Codes known out of the box.
pub fn default_department_names() -> BTreeMap<String, String> {
    [
        ("016", "RCA"),
        ("030", "Dietary"),
        ("040", "Activites"),
        ("050", "Housekeeping"),
        ("060", "Maintenance"),
        ("080", "Admin"),
    ]
    .into_iter()
    .map(|(code, name)| (code.to_string(), name.to_string()))
    .collect()
}

impl Default for DepartmentNames {
    fn default() -> Self {
        Self::new(default_department_names())
    }
}

impl DepartmentNames {
    pub fn new(names: BTreeMap<String, String>) -> Self {
        Self { names }
    }

    pub fn name(&self, code: &str) -> Option<&str> {
        self.names.get(code).map(String::as_str)
    }

    /// `"<code> <name>"` for known codes, the bare code otherwise.
    pub fn label(&self, code: &str) -> String {
        match self.name(code) {
            Some(name) => format!("{code} {name}"),
            None => code.to_string(),
        }
    }
}
