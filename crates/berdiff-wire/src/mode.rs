/// Which grammar the decoder follows.
///
/// ```text
/// ┌──────────────────────┬──────────┬─────────┐
/// │ Feature              │ Standard │ Gateway │
/// ├──────────────────────┼──────────┼─────────┤
/// │ High-form tags       │ yes      │ no      │
/// │ Long-form lengths    │ yes      │ no      │
/// │ Indefinite lengths   │ yes      │ no      │
/// │ Forced 3-child root  │ no       │ once    │
/// └──────────────────────┴──────────┴─────────┘
/// ```
///
/// Gateway mode models a filtering device that reads every tag as one
/// octet and every length as one octet. A length byte of `0x81` is the
/// value 129 to the gateway, but "one length octet follows" to a standard
/// decoder; that disagreement is what the two modes exist to expose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ParseMode {
    #[default]
    Standard,
    Gateway,
}

impl ParseMode {
    #[must_use]
    pub fn is_gateway(self) -> bool {
        self == Self::Gateway
    }

    /// Whether tags with low bits `11111` pull in continuation octets.
    #[must_use]
    pub fn honors_high_form_tags(self) -> bool {
        !self.is_gateway()
    }

    /// Whether `0x81..=0xFF` length bytes announce following length octets.
    #[must_use]
    pub fn honors_long_form_lengths(self) -> bool {
        !self.is_gateway()
    }

    /// Whether `0x80` on a constructed tag means "search for `00 00`".
    #[must_use]
    pub fn honors_indefinite_lengths(self) -> bool {
        !self.is_gateway()
    }

    /// Lowercase name, as accepted on the command line.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Gateway => "gateway",
        }
    }
}

impl std::fmt::Display for ParseMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
