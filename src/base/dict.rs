use std::fmt::{Display, Formatter};

use super::name::Name;
use super::object::Object;

/// Dictionary objects (like `<< /Length 42 >>`).
///
/// Key order is preserved: a dictionary serializes its entries exactly in the order they were
/// inserted.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct Dict(Vec<(Name, Object)>);

impl Dict {
    /// Looks up for a value for a given [`Name`] key. If not present, returns a static reference
    /// to [`Object::Null`].
    pub fn lookup(&self, key: &[u8]) -> &Object {
        self.0.iter()
            .find(|(name, _obj)| name == &key)
            .map(|(_name, obj)| obj)
            .unwrap_or(&Object::Null)
    }

    /// Sets `key` to `obj`. An existing value is replaced in place, keeping its position;
    /// otherwise the new pair is appended at the end.
    pub fn set(&mut self, key: &[u8], obj: Object) {
        match self.0.iter_mut().find(|(name, _obj)| name == &key) {
            Some((_name, val)) => *val = obj,
            None => self.0.push((Name::from(key), obj))
        }
    }
}

impl From<Vec<(Name, Object)>> for Dict {
    fn from(vec: Vec<(Name, Object)>) -> Dict {
        Dict(vec)
    }
}

impl Display for Dict {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("<< ")?;
        for (key, val) in &self.0 {
            write!(f, "{key} {val} ")?;
        }
        f.write_str(">>")
    }
}
