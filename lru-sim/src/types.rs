//! Shared base types.

use core::fmt::{Display, Formatter};
use core::ops::Deref;
use core::str::FromStr;

use heapless::String;

const MAX_COMPONENT_NAME: usize = 32;

/// The instance name of a component.
///
/// Tells apart multiple instances of the same component type in logs
/// and diagnostics. Can have at most 32 ASCII printable characters.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct ComponentName(String<MAX_COMPONENT_NAME>);

impl FromStr for ComponentName {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(String::from_str(s).map_err(|_| NameError)?))
    }
}

impl Deref for ComponentName {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.0.as_str()
    }
}

impl Display for ComponentName {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.0.as_str())
    }
}

/// A name did not fit the backing storage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NameError;

impl Display for NameError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "Name exceeds {MAX_COMPONENT_NAME} characters")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_names() {
        let name = ComponentName::from_str("Egi1ModController").unwrap();
        assert_eq!("Egi1ModController", &*name);
    }

    #[test]
    fn rejects_overlong_names() {
        let overlong = "X".repeat(MAX_COMPONENT_NAME + 1);
        assert_eq!(Err(NameError), ComponentName::from_str(&overlong));
    }
}
