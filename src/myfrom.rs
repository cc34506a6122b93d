use kstring::KString;

// Own trait instead of `From`, so that the number formatting used
// for attribute values and content lives in one place and can't be
// confused with KString's own `From` impls.
pub trait MyFrom<T> {
    fn myfrom(s: T) -> Self;
}

impl MyFrom<&str> for KString {
    fn myfrom(s: &str) -> Self {
        KString::from_ref(s)
    }
}

impl MyFrom<String> for KString {
    fn myfrom(s: String) -> Self {
        KString::from_string(s)
    }
}

impl MyFrom<i64> for KString {
    fn myfrom(val: i64) -> Self {
        KString::from_string(val.to_string())
    }
}

/// Integral floats print without a fractional part (`2.0` -> "2"),
/// non-finite ones as "INF", "-INF" and "NAN".
impl MyFrom<f64> for KString {
    fn myfrom(val: f64) -> Self {
        if val.is_nan() {
            KString::from_static("NAN")
        } else if val.is_infinite() {
            KString::from_static(if val > 0. { "INF" } else { "-INF" })
        } else if val.fract() == 0. && val.abs() < 1e15 {
            KString::from_string(format!("{}", val as i64))
        } else {
            KString::from_string(format!("{}", val))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn f(v: f64) -> String {
        KString::myfrom(v).to_string()
    }

    #[test]
    fn t_float() {
        assert_eq!(f(2.0), "2");
        assert_eq!(f(-0.5), "-0.5");
        assert_eq!(f(1.25), "1.25");
        assert_eq!(f(f64::INFINITY), "INF");
        assert_eq!(f(f64::NEG_INFINITY), "-INF");
        assert_eq!(f(f64::NAN), "NAN");
    }

    #[test]
    fn t_int() {
        assert_eq!(KString::myfrom(-12i64).as_str(), "-12");
    }
}
