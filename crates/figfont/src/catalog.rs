//! Fonts compiled into the crate.

macro_rules! bundled_fonts {
    ($($variant:ident => $file_name:expr,)*) => {
        /// A font shipped inside the crate.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[non_exhaustive]
        pub enum BundledFont {
            $(
                #[doc = concat!("Font `", $file_name, ".flf`")]
                $variant,
            )*
        }

        impl BundledFont {
            /// Every bundled font, in catalog order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),*];

            /// Raw `.flf` contents.
            #[must_use]
            pub const fn as_bytes(&self) -> &'static [u8] {
                match self {
                    $(Self::$variant => include_bytes!(concat!("../fonts/", $file_name, ".flf")),)*
                }
            }

            /// Catalog name, the file stem of the font.
            #[must_use]
            pub const fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => $file_name,)*
                }
            }

            #[must_use]
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($file_name => Some(Self::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

bundled_fonts! {
    Standard => "standard",
    Slant => "slant",
    Term => "term",
}
