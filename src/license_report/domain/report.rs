use super::License;

/// A component of an application report with the licenses attached to it
///
/// Declared licenses are the ones the component's publisher states; observed
/// licenses were found by Sonatype while scanning the component's contents.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Component {
    display_name: Option<String>,
    declared_licenses: Vec<License>,
    observed_licenses: Vec<License>,
}

impl Component {
    pub fn new(
        display_name: Option<String>,
        declared_licenses: Vec<License>,
        observed_licenses: Vec<License>,
    ) -> Self {
        Self {
            display_name,
            declared_licenses,
            observed_licenses,
        }
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    pub fn declared_licenses(&self) -> &[License] {
        &self.declared_licenses
    }

    pub fn observed_licenses(&self) -> &[License] {
        &self.observed_licenses
    }

    /// Declared licenses followed by observed licenses
    pub fn licenses(&self) -> impl Iterator<Item = &License> {
        self.declared_licenses
            .iter()
            .chain(self.observed_licenses.iter())
    }
}

/// Raw application report, read once per run and never mutated
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Report {
    components: Vec<Component>,
}

impl Report {
    pub fn new(components: Vec<Component>) -> Self {
        Self { components }
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}
