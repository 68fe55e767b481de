//! ANSI color palette.
//!
//! [`Color`] enumerates a fixed table of escape sequences. Wrapping text is done with
//! [`Color::paint`], or with a [`Colorizer`] when the wrapper has to be stored or passed
//! around. Every `Colorizer` owns its own prefix and reset, so building a second one never
//! changes what the first one emits.

use std::borrow::Cow;
use std::fmt;

/// Sequence restoring default rendering.
pub const RESET: &str = "\x1b[0m";

macro_rules! palette {
    ($($variant:ident => $name:literal, $code:literal;)*) => {
        /// Symbolic terminal colors and styles.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Color {
            $($variant,)*
        }

        impl Color {
            /// Every palette entry, in table order.
            pub const ALL: &'static [Color] = &[$(Color::$variant,)*];

            /// The escape sequence for this entry.
            pub const fn code(self) -> &'static str {
                match self {
                    $(Color::$variant => $code,)*
                }
            }

            /// Upper-snake name of this entry, e.g. `RED_BOLD_BRIGHT`.
            pub const fn name(self) -> &'static str {
                match self {
                    $(Color::$variant => $name,)*
                }
            }
        }
    };
}

palette! {
    Reset => "RESET", "\x1b[0m";

    Black => "BLACK", "\x1b[0;30m";
    Red => "RED", "\x1b[0;31m";
    Green => "GREEN", "\x1b[0;32m";
    Yellow => "YELLOW", "\x1b[0;33m";
    Blue => "BLUE", "\x1b[0;34m";
    Purple => "PURPLE", "\x1b[0;35m";
    Cyan => "CYAN", "\x1b[0;36m";
    White => "WHITE", "\x1b[0;37m";
    Grey => "GREY", "\x1b[0;90m";

    BlackBold => "BLACK_BOLD", "\x1b[1;30m";
    RedBold => "RED_BOLD", "\x1b[1;31m";
    GreenBold => "GREEN_BOLD", "\x1b[1;32m";
    YellowBold => "YELLOW_BOLD", "\x1b[1;33m";
    BlueBold => "BLUE_BOLD", "\x1b[1;34m";
    PurpleBold => "PURPLE_BOLD", "\x1b[1;35m";
    CyanBold => "CYAN_BOLD", "\x1b[1;36m";
    WhiteBold => "WHITE_BOLD", "\x1b[1;37m";

    BlackUnderlined => "BLACK_UNDERLINED", "\x1b[4;30m";
    RedUnderlined => "RED_UNDERLINED", "\x1b[4;31m";
    GreenUnderlined => "GREEN_UNDERLINED", "\x1b[4;32m";
    YellowUnderlined => "YELLOW_UNDERLINED", "\x1b[4;33m";
    BlueUnderlined => "BLUE_UNDERLINED", "\x1b[4;34m";
    PurpleUnderlined => "PURPLE_UNDERLINED", "\x1b[4;35m";
    CyanUnderlined => "CYAN_UNDERLINED", "\x1b[4;36m";
    WhiteUnderlined => "WHITE_UNDERLINED", "\x1b[4;37m";

    BlackBackground => "BLACK_BACKGROUND", "\x1b[40m";
    RedBackground => "RED_BACKGROUND", "\x1b[41m";
    GreenBackground => "GREEN_BACKGROUND", "\x1b[42m";
    YellowBackground => "YELLOW_BACKGROUND", "\x1b[43m";
    BlueBackground => "BLUE_BACKGROUND", "\x1b[44m";
    PurpleBackground => "PURPLE_BACKGROUND", "\x1b[45m";
    CyanBackground => "CYAN_BACKGROUND", "\x1b[46m";
    WhiteBackground => "WHITE_BACKGROUND", "\x1b[47m";

    BlackBright => "BLACK_BRIGHT", "\x1b[0;90m";
    RedBright => "RED_BRIGHT", "\x1b[0;91m";
    GreenBright => "GREEN_BRIGHT", "\x1b[0;92m";
    YellowBright => "YELLOW_BRIGHT", "\x1b[0;93m";
    BlueBright => "BLUE_BRIGHT", "\x1b[0;94m";
    PurpleBright => "PURPLE_BRIGHT", "\x1b[0;95m";
    CyanBright => "CYAN_BRIGHT", "\x1b[0;96m";
    WhiteBright => "WHITE_BRIGHT", "\x1b[0;97m";

    BlackBoldBright => "BLACK_BOLD_BRIGHT", "\x1b[1;90m";
    RedBoldBright => "RED_BOLD_BRIGHT", "\x1b[1;91m";
    GreenBoldBright => "GREEN_BOLD_BRIGHT", "\x1b[1;92m";
    YellowBoldBright => "YELLOW_BOLD_BRIGHT", "\x1b[1;93m";
    BlueBoldBright => "BLUE_BOLD_BRIGHT", "\x1b[1;94m";
    PurpleBoldBright => "PURPLE_BOLD_BRIGHT", "\x1b[1;95m";
    CyanBoldBright => "CYAN_BOLD_BRIGHT", "\x1b[1;96m";
    WhiteBoldBright => "WHITE_BOLD_BRIGHT", "\x1b[1;97m";

    BlackBackgroundBright => "BLACK_BACKGROUND_BRIGHT", "\x1b[0;100m";
    RedBackgroundBright => "RED_BACKGROUND_BRIGHT", "\x1b[0;101m";
    GreenBackgroundBright => "GREEN_BACKGROUND_BRIGHT", "\x1b[0;102m";
    YellowBackgroundBright => "YELLOW_BACKGROUND_BRIGHT", "\x1b[0;103m";
    BlueBackgroundBright => "BLUE_BACKGROUND_BRIGHT", "\x1b[0;104m";
    PurpleBackgroundBright => "PURPLE_BACKGROUND_BRIGHT", "\x1b[0;105m";
    CyanBackgroundBright => "CYAN_BACKGROUND_BRIGHT", "\x1b[0;106m";
    WhiteBackgroundBright => "WHITE_BACKGROUND_BRIGHT", "\x1b[0;107m";
}

impl Color {
    /// Wraps `text` in this entry's escape sequence and [`RESET`].
    ///
    /// ```
    /// use slepy::Color;
    ///
    /// assert_eq!(Color::Red.paint("hot"), "\x1b[0;31mhot\x1b[0m");
    /// ```
    pub fn paint(self, text: impl fmt::Display) -> String {
        format!("{}{text}{RESET}", self.code())
    }

    /// A stand-alone wrapper bound to this entry.
    pub fn colorizer(self) -> Colorizer {
        Colorizer::new(self.code(), RESET)
    }

    /// Looks up an entry by its table name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Color> {
        Self::ALL
            .iter()
            .copied()
            .find(|color| color.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Wraps text between an owned prefix and reset sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Colorizer {
    prefix: Cow<'static, str>,
    reset: Cow<'static, str>,
}

impl Colorizer {
    pub fn new(prefix: impl Into<Cow<'static, str>>, reset: impl Into<Cow<'static, str>>) -> Self {
        Self {
            prefix: prefix.into(),
            reset: reset.into(),
        }
    }

    /// A colorizer that leaves text untouched.
    pub const fn plain() -> Self {
        Self {
            prefix: Cow::Borrowed(""),
            reset: Cow::Borrowed(""),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn apply(&self, text: impl fmt::Display) -> String {
        format!("{}{text}{}", self.prefix, self.reset)
    }

    /// Turns the colorizer into a plain closure owning its sequences.
    pub fn into_fn(self) -> impl Fn(&str) -> String + Send + Sync + 'static {
        move |text: &str| self.apply(text)
    }
}

impl From<Color> for Colorizer {
    fn from(color: Color) -> Self {
        color.colorizer()
    }
}

/// Renders a boolean as a green `True` or a red `False`.
pub fn colorize_bool(value: bool) -> String {
    if value {
        Color::Green.paint("True")
    } else {
        Color::Red.paint("False")
    }
}
