use std::fmt;

use super::bag::PropertyBag;
use super::value::PropertyValue;

/// Renders a bag with the type of every key and value.
///
/// This walks nested bags and lists and allocates the whole dump, so keep it
/// for logging and debugging rather than per-frame code.
///
/// # Examples
///
/// ```
/// use netprops_common::{to_string_full, PropertyBag, PropertyKey};
///
/// let mut bag = PropertyBag::new();
/// bag.insert(PropertyKey::Byte(255), "Ann");
/// bag.insert("hp", 10);
/// assert_eq!(to_string_full(&bag), r#"{(byte)255=(string)"Ann", (string)"hp"=(int)10}"#);
/// ```
pub fn to_string_full(bag: &PropertyBag) -> String {
    bag.to_string()
}

pub(super) fn write_bag(f: &mut fmt::Formatter<'_>, bag: &PropertyBag) -> fmt::Result {
    f.write_str("{")?;
    for (index, (key, value)) in bag.iter().enumerate() {
        if index > 0 {
            f.write_str(", ")?;
        }
        write!(f, "({}){}={}", key.type_name(), key, Typed(value))?;
    }
    f.write_str("}")
}

/// A value prefixed with its type label.
struct Typed<'a>(&'a PropertyValue);

impl fmt::Display for Typed<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.0.type_name())?;
        match self.0 {
            PropertyValue::Null => f.write_str("null"),
            PropertyValue::Bool(v) => write!(f, "{}", v),
            PropertyValue::Byte(v) => write!(f, "{}", v),
            PropertyValue::Int(v) => write!(f, "{}", v),
            PropertyValue::Long(v) => write!(f, "{}", v),
            PropertyValue::Float(v) => write!(f, "{}", v),
            PropertyValue::Double(v) => write!(f, "{}", v),
            PropertyValue::Text(v) => write!(f, "{:?}", v),
            PropertyValue::IntArray(values) => write!(f, "{:?}", values),
            PropertyValue::Vector2(v) => write!(f, "({}, {})", v.x, v.y),
            PropertyValue::Vector3(v) => write!(f, "({}, {}, {})", v.x, v.y, v.z),
            PropertyValue::Quaternion(q) => write!(f, "({}, {}, {}, {})", q.x, q.y, q.z, q.w),
            PropertyValue::List(values) => {
                f.write_str("[")?;
                for (index, item) in values.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", Typed(item))?;
                }
                f.write_str("]")
            }
            PropertyValue::Bag(nested) => write_bag(f, nested),
        }
    }
}
