/// Generates an enum mapping Rust variants to InboundXML wire tokens.
///
/// Produces: enum definition + `as_str()` + `Display` + `AsRef<str>` + `FromStr`
/// (case-insensitive, failing with [`InboundXmlError::InvalidEnumLiteral`]) +
/// [`AttributeValue`].
///
/// ```ignore
/// define_wire_enum! {
///     /// Doc comment for the enum.
///     #[derive(Default)]
///     pub enum MyEnum {
///         #[default]
///         Foo => "foo",
///         Bar => "bar",
///     }
/// }
/// ```
///
/// [`InboundXmlError::InvalidEnumLiteral`]: crate::inboundxml::InboundXmlError::InvalidEnumLiteral
/// [`AttributeValue`]: crate::inboundxml::AttributeValue
macro_rules! define_wire_enum {
    (
        $(#[$enum_meta:meta])*
        $vis:vis enum $Name:ident {
            $(
                $(#[$var_meta:meta])*
                $variant:ident => $wire:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $Name {
            $(
                $(#[$var_meta])*
                $variant,
            )+
        }

        impl $Name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$Name] = &[$( $Name::$variant, )+];

            /// Wire-format token.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $Name::$variant => $wire, )+
                }
            }
        }

        impl std::fmt::Display for $Name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl AsRef<str> for $Name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl std::str::FromStr for $Name {
            type Err = $crate::inboundxml::InboundXmlError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let trimmed = s.trim();
                $(
                    if trimmed.eq_ignore_ascii_case($wire) {
                        return Ok($Name::$variant);
                    }
                )+
                Err($crate::inboundxml::InboundXmlError::InvalidEnumLiteral {
                    kind: stringify!($Name),
                    literal: s.to_owned(),
                })
            }
        }

        impl $crate::inboundxml::AttributeValue for $Name {
            fn to_attribute(&self) -> String {
                self.as_str().to_owned()
            }

            fn from_attribute(raw: &str) -> Option<Self> {
                raw.parse().ok()
            }
        }
    };
}

/// Declares the nesting relation once and derives both of its forms from it:
/// `CanNest<Child>` impls for the compile-time builder, and the runtime
/// `can_nest(parent, child)` table used by checked appends.
macro_rules! nesting_rules {
    (
        $(
            $Parent:ident => [$( $Child:ident ),+ $(,)?]
        ),+ $(,)?
    ) => {
        $(
            impl Parent for $Parent {}
            $( impl CanNest<$Child> for $Parent {} )+
        )+

        /// Whether `child` may appear as a direct child of `parent`.
        pub fn can_nest(parent: Tag, child: Tag) -> bool {
            match parent {
                $( Tag::$Parent => matches!(child, $( Tag::$Child )|+), )+
                _ => false,
            }
        }

        /// Whether elements tagged `tag` accept children at all.
        pub fn is_parent(tag: Tag) -> bool {
            matches!(tag, $( Tag::$Parent )|+)
        }
    };
}

/// Implements [`Element`](crate::inboundxml::Element) for verb structs that
/// wrap a `node: Node` field; the tag is the `Tag` variant of the same name.
macro_rules! impl_element {
    ($( $Name:ident ),+ $(,)?) => {
        $(
            impl $crate::inboundxml::nesting::sealed::SealedElement for $Name {}

            impl $crate::inboundxml::Element for $Name {
                const TAG: $crate::inboundxml::Tag = $crate::inboundxml::Tag::$Name;

                fn node(&self) -> &$crate::inboundxml::Node {
                    &self.node
                }

                fn node_mut(&mut self) -> &mut $crate::inboundxml::Node {
                    &mut self.node
                }

                fn into_node(self) -> $crate::inboundxml::Node {
                    self.node
                }
            }
        )+
    };
}
