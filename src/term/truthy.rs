// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Truthiness coercion for literal term values.
//!
//! A literal term is never inspected for its concrete type by the engine. It is
//! coerced to a strict `bool` once, when the term is built, through this trait.
//!
//! # Rules
//! * `bool` - itself
//! * integers - non-zero
//! * floats - non-zero and not NaN
//! * `str` / `String` - non-empty
//! * `char` - always truthy
//! * `()` - always falsy
//! * `Option<T>` - `None` is falsy, `Some(v)` defers to `v`
//! * `Vec<T>` / slices - always truthy, regardless of length
//! * `serde_json::Value` - `null`, `false`, `0`, `""` are falsy; arrays and objects are truthy

/// A value that can be interpreted as a boolean.
pub trait Truthy {
    fn truthy(&self) -> bool;
}

impl Truthy for bool {
    fn truthy(&self) -> bool {
        *self
    }
}

macro_rules! impl_truthy_for_integers {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Truthy for $ty {
                fn truthy(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

impl_truthy_for_integers!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Truthy for f32 {
    fn truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for f64 {
    fn truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for str {
    fn truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    fn truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for char {
    fn truthy(&self) -> bool {
        true
    }
}

impl Truthy for () {
    fn truthy(&self) -> bool {
        false
    }
}

impl<T: Truthy> Truthy for Option<T> {
    fn truthy(&self) -> bool {
        self.as_ref().is_some_and(|value| value.truthy())
    }
}

impl<T> Truthy for Vec<T> {
    fn truthy(&self) -> bool {
        true
    }
}

impl<T> Truthy for [T] {
    fn truthy(&self) -> bool {
        true
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    fn truthy(&self) -> bool {
        (**self).truthy()
    }
}

impl<T: Truthy + ?Sized> Truthy for Box<T> {
    fn truthy(&self) -> bool {
        (**self).truthy()
    }
}

impl Truthy for serde_json::Value {
    fn truthy(&self) -> bool {
        use serde_json::Value;

        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().is_some_and(|f| f.truthy()),
            Value::String(s) => s.truthy(),
            Value::Array(_) | Value::Object(_) => true,
        }
    }
}
