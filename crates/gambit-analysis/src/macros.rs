/// Declare a fieldless tag enum whose variant order fixes the ids, with each
/// variant's name (its identifier) and description.
macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        $vis:vis enum $tag:ident {
            $($variant:ident => $description:literal,)*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(u8)]
        $vis enum $tag {
            $($variant,)*
        }

        impl $tag {
            const VARIANTS: &'static [$tag] = &[$($tag::$variant,)*];

            const fn variant_name(self) -> &'static str {
                match self {
                    $($tag::$variant => stringify!($variant),)*
                }
            }

            const fn variant_description(self) -> &'static str {
                match self {
                    $($tag::$variant => $description,)*
                }
            }
        }

        impl std::fmt::Display for $tag {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.variant_name())
            }
        }
    };
}
