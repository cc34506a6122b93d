//! The dynamically typed input model: everything that can be passed
//! as attributes or contents of an element.

use std::{fmt, rc::Rc};

use anyhow::Result;
use kstring::KString;

use crate::{element::HtmlElement, myfrom::MyFrom};

/// Key of a container entry. `Index` keys only carry a position;
/// they are renumbered when flattening.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    Index(usize),
    Name(KString),
}

impl Key {
    pub fn name(&self) -> Option<&KString> {
        match self {
            Key::Index(_) => None,
            Key::Name(n) => Some(n),
        }
    }
}

impl From<usize> for Key {
    fn from(i: usize) -> Self {
        Key::Index(i)
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::Name(KString::myfrom(s))
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Key::Name(KString::myfrom(s))
    }
}

impl From<KString> for Key {
    fn from(s: KString) -> Self {
        Key::Name(s)
    }
}


/// Capabilities an application object can offer. All of them are
/// optional; an object offering none is dropped from contents and
/// omitted as attribute value.
pub trait HtmlObject: fmt::Debug {
    /// Conversion to plain text (escaped when used as content).
    fn to_kstring(&self) -> Option<KString> {
        None
    }

    /// Trusted, preserialized HTML. Takes precedence over
    /// `to_kstring` in contents and is never escaped.
    fn to_html(&self) -> Option<String> {
        None
    }

    /// Conversion to a keyed container. Flattening uses this in
    /// preference to treating the object as a single value.
    fn to_container(&self) -> Option<Vec<(Key, Value)>> {
        None
    }
}


/// A zero-argument computation, run during evaluation. Errors are
/// passed through to the caller of the serializer unchanged.
#[derive(Clone)]
pub struct Deferred(Rc<dyn Fn() -> Result<Value>>);

impl Deferred {
    pub fn new(f: impl Fn() -> Result<Value> + 'static) -> Self {
        Deferred(Rc::new(f))
    }

    pub fn call(&self) -> Result<Value> {
        (self.0)()
    }
}

impl fmt::Debug for Deferred {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Deferred({:p})", Rc::as_ptr(&self.0))
    }
}

impl PartialEq for Deferred {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Rc::as_ptr(&self.0), Rc::as_ptr(&other.0))
    }
}


#[derive(Debug, Clone)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(KString),
    Deferred(Deferred),
    Container(Vec<(Key, Value)>),
    Object(Rc<dyn HtmlObject>),
    Element(Rc<HtmlElement>),
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Deferred(a), Value::Deferred(b)) => a == b,
            (Value::Container(a), Value::Container(b)) => a == b,
            (Value::Object(a), Value::Object(b)) =>
                std::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b)),
            (Value::Element(a), Value::Element(b)) => Rc::ptr_eq(a, b) || a == b,
            _ => false,
        }
    }
}

impl Value {
    /// A sequential container, keys 0..n.
    pub fn list<V: Into<Value>>(items: impl IntoIterator<Item = V>) -> Value {
        Value::Container(
            items.into_iter()
                .enumerate()
                .map(|(i, v)| (Key::Index(i), v.into()))
                .collect())
    }

    /// A keyed container, in the given order.
    pub fn map<K: Into<Key>, V: Into<Value>>(
        items: impl IntoIterator<Item = (K, V)>
    ) -> Value {
        Value::Container(
            items.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect())
    }

    pub fn deferred(f: impl Fn() -> Result<Value> + 'static) -> Value {
        Value::Deferred(Deferred::new(f))
    }

    /// Infallible variant of `deferred`.
    pub fn lazy<V: Into<Value>>(f: impl Fn() -> V + 'static) -> Value {
        Value::deferred(move || Ok(f().into()))
    }

    pub fn object(obj: impl HtmlObject + 'static) -> Value {
        Value::Object(Rc::new(obj))
    }

    pub fn is_container_like(&self) -> bool {
        match self {
            Value::Container(_) => true,
            Value::Object(obj) => obj.to_container().is_some(),
            _ => false,
        }
    }

    /// Empty strings, "0", zero numbers, empty containers, `false`
    /// and null are falsy; everything else is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Int(i) => *i != 0,
            Value::Float(f) => *f != 0.,
            Value::Str(s) => !(s.is_empty() || s.as_str() == "0"),
            Value::Container(entries) => !entries.is_empty(),
            Value::Deferred(_) | Value::Object(_) | Value::Element(_) => true,
        }
    }

    /// The text form of strings, numbers and string-convertible
    /// objects. `None` for null, booleans and everything else.
    pub fn to_text(&self) -> Option<KString> {
        match self {
            Value::Str(s) => Some(s.clone()),
            Value::Int(i) => Some(KString::myfrom(*i)),
            Value::Float(f) => Some(KString::myfrom(*f)),
            Value::Object(obj) => obj.to_kstring(),
            Value::Null
                | Value::Bool(_)
                | Value::Deferred(_)
                | Value::Container(_)
                | Value::Element(_) => None,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(KString::myfrom(s))
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::Str(KString::myfrom(s.as_str()))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(KString::myfrom(s))
    }
}

impl From<KString> for Value {
    fn from(s: KString) -> Self {
        Value::Str(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i.into())
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<u32> for Value {
    fn from(i: u32) -> Self {
        Value::Int(i.into())
    }
}

impl From<usize> for Value {
    fn from(i: usize) -> Self {
        match i64::try_from(i) {
            Ok(i) => Value::Int(i),
            Err(_) => Value::Float(i as f64),
        }
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<HtmlElement> for Value {
    fn from(e: HtmlElement) -> Self {
        Value::Element(Rc::new(e))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::list(v)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Opaque;
    impl HtmlObject for Opaque {}

    #[test]
    fn t_truthy() {
        assert!(!Value::Null.is_truthy());
        assert!(!Value::from(false).is_truthy());
        assert!(!Value::from("").is_truthy());
        assert!(!Value::from("0").is_truthy());
        assert!(Value::from("00").is_truthy());
        assert!(Value::from(" ").is_truthy());
        assert!(!Value::from(0).is_truthy());
        assert!(!Value::from(0.0).is_truthy());
        assert!(Value::from(-1).is_truthy());
        assert!(!Value::list(Vec::<Value>::new()).is_truthy());
        assert!(Value::list(["a"]).is_truthy());
        assert!(Value::object(Opaque).is_truthy());
    }

    #[test]
    fn t_to_text() {
        assert_eq!(Value::from(3).to_text().unwrap().as_str(), "3");
        assert_eq!(Value::from(1.5).to_text().unwrap().as_str(), "1.5");
        assert_eq!(Value::from(true).to_text(), None);
        assert_eq!(Value::Null.to_text(), None);
        assert_eq!(Value::object(Opaque).to_text(), None);
    }

    #[test]
    fn t_constructors() {
        assert_eq!(
            Value::list(["a", "b"]),
            Value::Container(vec![(Key::Index(0), "a".into()),
                                  (Key::Index(1), "b".into())]));
        assert_eq!(
            Value::map([("x", 1)]),
            Value::Container(vec![(Key::from("x"), Value::Int(1))]));
        assert_eq!(Value::from(None::<&str>), Value::Null);
        assert!(Value::list([1]).is_container_like());
        assert!(!Value::object(Opaque).is_container_like());
    }

    #[test]
    fn t_deferred_identity() {
        let d = Value::lazy(|| "x");
        assert_eq!(d.clone(), d);
        assert_ne!(Value::lazy(|| "x"), d);
    }
}
