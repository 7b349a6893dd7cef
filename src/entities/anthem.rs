use crate::Anthem;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct SimpleAnthem {
    title: String,
}

impl SimpleAnthem {
    pub fn new<S: Into<String>>(title: S) -> Self {
        Self {
            title: title.into(),
        }
    }
}

impl Anthem for SimpleAnthem {
    fn title(&self) -> &str {
        &self.title
    }
}

impl From<&dyn Anthem> for SimpleAnthem {
    fn from(anthem: &dyn Anthem) -> Self {
        Self::new(anthem.title())
    }
}
