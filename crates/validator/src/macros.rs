//! The [`validator!`] macro: a rule struct, its `Validate` impl and a
//! factory function in one declaration.
//!
//! ```rust,ignore
//! validator! {
//!     /// Rejects values below `min`.
//!     pub Min { min: f64 } for f64;
//!     rule(self, input) { *input >= self.min }
//!     error(self, input) { ValidationError::new(MessageKey::Min).with_param("min", self.min) }
//!     fn min(min: f64);
//! }
//! ```
//!
//! Without a `new(..)` clause the constructor takes every field in order.
//! Rule structs always derive `Debug` and `Clone`; further derives go in the
//! attribute list.

#[macro_export]
macro_rules! validator {
    // ── Custom constructor ───────────────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($eself:ident, $einp:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::validator!(@struct $(#[$meta])* $vis $name { $($field: $fty),+ });

        #[allow(clippy::new_without_default)]
        impl $name {
            #[must_use]
            pub fn new($($narg: $naty),*) -> Self $new_body
        }

        $crate::validator!(@validate $name, $input, $self_, $inp, $rule, $err);
        $crate::validator!(@factory $vis $name, $factory($($farg: $faty),*));
    };

    // ── Field-wise constructor ───────────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($eself:ident, $einp:ident) $err:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::validator!(@struct $(#[$meta])* $vis $name { $($field: $fty),+ });

        impl $name {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        $crate::validator!(@validate $name, $input, $self_, $inp, $rule, $err);
        $crate::validator!(@factory $vis $name, $factory($($farg: $faty),*));
    };

    (@struct $(#[$meta:meta])* $vis:vis $name:ident { $($field:ident: $fty:ty),+ }) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }
    };

    (@validate $name:ident, $input:ty, $self_:ident, $inp:ident, $rule:block, $err:block) => {
        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&$self_, $inp: &Self::Input) -> Result<(), $crate::foundation::ValidationError> {
                if $rule { Ok(()) } else { Err($err) }
            }
        }
    };

    (@factory $vis:vis $name:ident, $factory:ident($($farg:ident: $faty:ty),*)) => {
        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };
}
