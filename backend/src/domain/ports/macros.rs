//! Helper macro for declaring port error enums.
//!
//! Each variant gets a snake_case constructor; string-ish fields accept
//! anything `Into` their declared type so adapters can pass `&str` or
//! `err.to_string()` directly.

macro_rules! define_port_error {
    (@ctor $variant:ident) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@ctor $variant:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]($($field: impl Into<$ty>),*) -> Self {
                Self::$variant { $($field: $field.into()),* }
            }
        }
    };

    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( { $($field:ident : $ty:ty),* $(,)? } )? => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $($field : $ty),* } )?,
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor $variant $( { $($field : $ty),* } )?);
            )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    define_port_error! {
        pub enum LedgerPortError {
            Unreachable => "ledger unreachable",
            Rejected { reason: String } => "ledger rejected entry: {reason}",
            Throttled { retry_after_secs: u32 } => "ledger throttled for {retry_after_secs}s",
            Partial { reason: String, written: u32 } => "partial write ({written}): {reason}",
        }
    }

    #[test]
    fn unit_variants_get_nullary_constructors() {
        assert_eq!(LedgerPortError::unreachable(), LedgerPortError::Unreachable);
        assert_eq!(LedgerPortError::unreachable().to_string(), "ledger unreachable");
    }

    #[test]
    fn string_fields_accept_borrowed_input() {
        let err = LedgerPortError::rejected("duplicate");
        assert_eq!(err.to_string(), "ledger rejected entry: duplicate");
    }

    #[test]
    fn mixed_fields_keep_their_types() {
        assert_eq!(
            LedgerPortError::throttled(3_u32).to_string(),
            "ledger throttled for 3s"
        );
        assert_eq!(
            LedgerPortError::partial("disk full", 2_u32).to_string(),
            "partial write (2): disk full"
        );
    }
}
