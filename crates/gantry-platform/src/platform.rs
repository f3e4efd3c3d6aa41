use crate::error::{Error, Result};

/// A target platform a build can produce artifacts for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Platform {
    name: String,
    architecture: String,
    operating_system: String,
}

impl Platform {
    pub fn new(
        name: impl Into<String>,
        architecture: impl Into<String>,
        operating_system: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            architecture: architecture.into(),
            operating_system: operating_system.into(),
        }
    }

    /// The platform this process is running on, named `{os}_{arch}`.
    pub fn host() -> Self {
        let os = std::env::consts::OS;
        let arch = std::env::consts::ARCH;
        Self::new(format!("{os}_{arch}"), arch, os)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn architecture(&self) -> &str {
        &self.architecture
    }

    pub fn operating_system(&self) -> &str {
        &self.operating_system
    }
}

/// Ordered, name-unique set of platforms. Insertion order is the search
/// order used when selecting platforms for requested target names.
#[derive(Debug, Default)]
pub struct PlatformContainer {
    platforms: Vec<Platform>,
}

impl PlatformContainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// A container pre-seeded with the host platform.
    pub fn with_host_defaults() -> Self {
        let mut container = Self::new();
        container.add(Platform::host());
        container
    }

    /// Adds `platform`, replacing a same-named entry in place so its
    /// position in the search order is kept. Returns the replaced entry.
    pub fn add(&mut self, platform: Platform) -> Option<Platform> {
        match self
            .platforms
            .iter_mut()
            .find(|existing| existing.name == platform.name)
        {
            Some(existing) => Some(std::mem::replace(existing, platform)),
            None => {
                self.platforms.push(platform);
                None
            },
        }
    }

    pub fn get(&self, name: &str) -> Option<&Platform> {
        self.platforms.iter().find(|p| p.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.platforms.iter().map(|p| p.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Platform> {
        self.platforms.iter()
    }

    pub fn len(&self) -> usize {
        self.platforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.platforms.is_empty()
    }

    /// Selects the platforms matching `requested`, in container order, not
    /// request order.
    ///
    /// Each platform satisfies at most one occurrence of its name, so a
    /// name requested twice leaves one occurrence unmatched. Any unmatched
    /// names fail the whole selection; an empty request selects nothing.
    pub fn select_for_targets(&self, requested: &[String]) -> Result<Vec<&Platform>> {
        let mut not_found: Vec<&str> = requested.iter().map(String::as_str).collect();
        let mut matching = Vec::new();
        for platform in &self.platforms {
            if let Some(position) = not_found.iter().position(|name| *name == platform.name) {
                not_found.remove(position);
                matching.push(platform);
            }
        }

        if not_found.is_empty() {
            Ok(matching)
        } else {
            Err(Error::unknown_targets(not_found))
        }
    }
}

impl<'a> IntoIterator for &'a PlatformContainer {
    type Item = &'a Platform;
    type IntoIter = std::slice::Iter<'a, Platform>;

    fn into_iter(self) -> Self::IntoIter {
        self.platforms.iter()
    }
}
