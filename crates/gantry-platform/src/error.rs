use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// One or more requested platform names match nothing in the container.
    #[error("{}", unknown_targets_message(.names))]
    UnknownTargets { names: Vec<String> },
}

impl Error {
    pub fn unknown_targets<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::UnknownTargets {
            names: names.into_iter().map(Into::into).collect(),
        }
    }
}

fn unknown_targets_message(names: &[String]) -> String {
    if names.len() == 1 {
        format!("invalid platform: {}", names[0])
    } else {
        format!("invalid platforms: {}", names.join(", "))
    }
}
