/// Define an error type wrapper e.g. `Foo` around a
/// `Box<FooKind>`, keeping `Result<T, Foo>` one pointer wide.
/// Implements `std::error::Error`, `Display`, `Debug`, `Deref` to
/// `FooKind` and `From<E>` for everything `FooKind` converts from,
/// so `thiserror`'s `#[from]` and `?` keep working on the wrapper.
#[macro_export]
macro_rules! def_boxed_error {
    ($wrappername:ident, $kindname:ident) => {
        #[derive(Debug)]
        pub struct $wrappername(Box<$kindname>);

        impl $wrappername {
            pub fn kind(&self) -> &$kindname {
                &self.0
            }
        }

        impl std::ops::Deref for $wrappername {
            type Target = $kindname;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl<E> From<E> for $wrappername where $kindname: From<E> {
            fn from(err: E) -> Self {
                $wrappername(Box::new($kindname::from(err)))
            }
        }

        impl std::error::Error for $wrappername {
            fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
                std::error::Error::source(&*self.0)
            }
        }

        impl std::fmt::Display for $wrappername {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Display::fmt(&*self.0, f)
            }
        }
    }
}

/// Defines both a `thiserror` kind type and its box wrapper as per
/// `def_boxed_error`:
///
/// `def_boxed_thiserror!(FooError, pub enum FooErrorKind { ... });`
/// (or `struct` instead of `enum`)
#[macro_export]
macro_rules! def_boxed_thiserror {
    ($wrappername:ident, $(#[$meta:meta])* $vis:vis enum $kindname:ident {$($body:tt)*}) => {
        #[derive(thiserror::Error, Debug)]
        $(#[$meta])*
        $vis enum $kindname {
            $($body)*
        }

        $crate::def_boxed_error!($wrappername, $kindname);
    };
    ($wrappername:ident, $(#[$meta:meta])* $vis:vis struct $kindname:ident {$($body:tt)*}) => {
        #[derive(thiserror::Error, Debug)]
        $(#[$meta])*
        $vis struct $kindname {
            $($body)*
        }

        $crate::def_boxed_error!($wrappername, $kindname);
    };
}


#[cfg(test)]
mod tests {
    crate::def_boxed_thiserror!(ParseFailure, pub enum ParseFailureKind {
        #[error("empty input")]
        Empty,
        #[error("bad number")]
        Number(#[from] std::num::ParseIntError),
    });

    crate::def_boxed_thiserror!(PosFailure, #[error("at position {pos}")]
                                pub struct PosFailureInner {
        pos: usize,
    });

    fn parse(s: &str) -> Result<i64, ParseFailure> {
        if s.is_empty() {
            Err(ParseFailureKind::Empty)?
        }
        Ok(s.parse()?)
    }

    #[test]
    fn t_enum_kind() {
        assert_eq!(parse("12").unwrap(), 12);
        assert!(matches!(parse("").unwrap_err().kind(), ParseFailureKind::Empty));
        let e = parse("x").unwrap_err();
        assert!(matches!(*e, ParseFailureKind::Number(_)));
        assert_eq!(e.to_string(), "bad number");
        assert!(std::error::Error::source(&e).is_some());
        assert_eq!(std::mem::size_of::<ParseFailure>(), std::mem::size_of::<usize>());
    }

    #[test]
    fn t_struct_kind() {
        let e = PosFailure::from(PosFailureInner { pos: 3 });
        assert_eq!(e.pos, 3);
        assert_eq!(e.to_string(), "at position 3");
    }
}
