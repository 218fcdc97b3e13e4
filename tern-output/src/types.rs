use tern_vte::VtId;

/// Region selector for the erase operations (ED / EL).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum EraseType {
    /// From the cursor to the end of the display or line.
    ToEnd = 0,
    /// From the beginning of the display or line to the cursor.
    FromBeginning = 1,
    /// The whole display or line.
    All = 2,
    /// The scrollback buffer (ED only).
    Scrollback = 3,
}

impl EraseType {
    pub(crate) fn from_raw(raw: u16) -> Option<Self> {
        match raw {
            0 => Some(Self::ToEnd),
            1 => Some(Self::FromBeginning),
            2 => Some(Self::All),
            3 => Some(Self::Scrollback),
            _ => None,
        }
    }
}

/// The three line feed flavors: NEL returns the cursor to column one, IND
/// keeps the column, and the C0 controls defer to the line-feed/new-line
/// mode of the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineFeedType {
    WithReturn,
    WithoutReturn,
    DependsOnMode,
}

/// Status queries accepted by DSR.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum AnsiStatusType {
    OperatingStatus = 5,
    CursorPositionReport = 6,
}

impl AnsiStatusType {
    pub(crate) fn from_raw(raw: u16) -> Option<Self> {
        match raw {
            5 => Some(Self::OperatingStatus),
            6 => Some(Self::CursorPositionReport),
            _ => None,
        }
    }
}

/// Cursor styles selectable through DECSCUSR.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum CursorStyle {
    /// Restore the user-configured default.
    #[default]
    UserDefault = 0,
    BlinkingBlock = 1,
    SteadyBlock = 2,
    BlinkingUnderline = 3,
    SteadyUnderline = 4,
    BlinkingBar = 5,
    SteadyBar = 6,
}

impl CursorStyle {
    pub(crate) fn from_raw(raw: u16) -> Option<Self> {
        match raw {
            0 => Some(Self::UserDefault),
            1 => Some(Self::BlinkingBlock),
            2 => Some(Self::SteadyBlock),
            3 => Some(Self::BlinkingUnderline),
            4 => Some(Self::SteadyUnderline),
            5 => Some(Self::BlinkingBar),
            6 => Some(Self::SteadyBar),
            _ => None,
        }
    }
}

/// Window manipulation functions the output side accepts. This is kept
/// separate from the input-side repertoire; codes supported in one
/// direction are not necessarily supported in the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum WindowManipulationType {
    RefreshWindow = 7,
    ResizeWindowInCharacters = 8,
}

impl WindowManipulationType {
    pub(crate) fn from_raw(raw: u16) -> Option<Self> {
        match raw {
            7 => Some(Self::RefreshWindow),
            8 => Some(Self::ResizeWindowInCharacters),
            _ => None,
        }
    }
}

/// Wrapper for SGR options: recognized values carry their name, everything
/// else passes through with its raw code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphicsRendition {
    Named(NamedGraphicsRendition),
    Unknown(u16),
}

impl GraphicsRendition {
    pub(crate) fn from_raw(raw: u16) -> Self {
        use NamedGraphicsRendition::*;

        let named = match raw {
            0 => Off,
            1 => BoldBright,
            2 => RgbColorOrFaint,
            3 => Italics,
            4 => Underline,
            5 => BlinkOrXterm256Index,
            6 => RapidBlink,
            7 => Negative,
            8 => Invisible,
            9 => CrossedOut,
            21 => DoublyUnderlined,
            22 => NotBoldOrFaint,
            23 => NotItalics,
            24 => NoUnderline,
            25 => Steady,
            27 => Positive,
            28 => Visible,
            29 => NotCrossedOut,
            30 => ForegroundBlack,
            31 => ForegroundRed,
            32 => ForegroundGreen,
            33 => ForegroundYellow,
            34 => ForegroundBlue,
            35 => ForegroundMagenta,
            36 => ForegroundCyan,
            37 => ForegroundWhite,
            38 => ForegroundExtended,
            39 => ForegroundDefault,
            40 => BackgroundBlack,
            41 => BackgroundRed,
            42 => BackgroundGreen,
            43 => BackgroundYellow,
            44 => BackgroundBlue,
            45 => BackgroundMagenta,
            46 => BackgroundCyan,
            47 => BackgroundWhite,
            48 => BackgroundExtended,
            49 => BackgroundDefault,
            53 => Overline,
            55 => NoOverline,
            90 => BrightForegroundBlack,
            91 => BrightForegroundRed,
            92 => BrightForegroundGreen,
            93 => BrightForegroundYellow,
            94 => BrightForegroundBlue,
            95 => BrightForegroundMagenta,
            96 => BrightForegroundCyan,
            97 => BrightForegroundWhite,
            100 => BrightBackgroundBlack,
            101 => BrightBackgroundRed,
            102 => BrightBackgroundGreen,
            103 => BrightBackgroundYellow,
            104 => BrightBackgroundBlue,
            105 => BrightBackgroundMagenta,
            106 => BrightBackgroundCyan,
            107 => BrightBackgroundWhite,
            other => return Self::Unknown(other),
        };

        Self::Named(named)
    }

    /// Raw numeric value of the option.
    #[must_use]
    pub fn raw(self) -> u16 {
        match self {
            Self::Named(named) => named as u16,
            Self::Unknown(raw) => raw,
        }
    }
}

/// SGR options with defined meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum NamedGraphicsRendition {
    Off = 0,
    BoldBright = 1,
    /// 2 doubles as both the extended-color introducer argument and
    /// faint/decreased intensity.
    RgbColorOrFaint = 2,
    Italics = 3,
    Underline = 4,
    /// 5 doubles as both the 256-color introducer argument and blink.
    BlinkOrXterm256Index = 5,
    RapidBlink = 6,
    Negative = 7,
    Invisible = 8,
    CrossedOut = 9,
    DoublyUnderlined = 21,
    NotBoldOrFaint = 22,
    NotItalics = 23,
    NoUnderline = 24,
    Steady = 25,
    Positive = 27,
    Visible = 28,
    NotCrossedOut = 29,
    ForegroundBlack = 30,
    ForegroundRed = 31,
    ForegroundGreen = 32,
    ForegroundYellow = 33,
    ForegroundBlue = 34,
    ForegroundMagenta = 35,
    ForegroundCyan = 36,
    ForegroundWhite = 37,
    ForegroundExtended = 38,
    ForegroundDefault = 39,
    BackgroundBlack = 40,
    BackgroundRed = 41,
    BackgroundGreen = 42,
    BackgroundYellow = 43,
    BackgroundBlue = 44,
    BackgroundMagenta = 45,
    BackgroundCyan = 46,
    BackgroundWhite = 47,
    BackgroundExtended = 48,
    BackgroundDefault = 49,
    Overline = 53,
    NoOverline = 55,
    BrightForegroundBlack = 90,
    BrightForegroundRed = 91,
    BrightForegroundGreen = 92,
    BrightForegroundYellow = 93,
    BrightForegroundBlue = 94,
    BrightForegroundMagenta = 95,
    BrightForegroundCyan = 96,
    BrightForegroundWhite = 97,
    BrightBackgroundBlack = 100,
    BrightBackgroundRed = 101,
    BrightBackgroundGreen = 102,
    BrightBackgroundYellow = 103,
    BrightBackgroundBlue = 104,
    BrightBackgroundMagenta = 105,
    BrightBackgroundCyan = 106,
    BrightBackgroundWhite = 107,
}

/// Wrapper for the DEC private modes set and reset through DECSET/DECRST.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrivateMode {
    Named(NamedPrivateMode),
    Unknown(u16),
}

impl PrivateMode {
    pub(crate) fn from_raw(raw: u16) -> Self {
        use NamedPrivateMode::*;

        let named = match raw {
            1 => CursorKeys,
            2 => AnsiMode,
            3 => SetNumberOfColumns,
            5 => ScreenMode,
            6 => Origin,
            7 => AutoWrap,
            12 => StartCursorBlink,
            25 => TextCursorEnable,
            40 => EnableColumnMode,
            1000 => Vt200Mouse,
            1002 => ButtonEventMouse,
            1003 => AnyEventMouse,
            1005 => Utf8ExtendedMouse,
            1006 => SgrExtendedMouse,
            1007 => AlternateScroll,
            1049 => AlternateScreenBuffer,
            9001 => Win32InputMode,
            other => return Self::Unknown(other),
        };

        Self::Named(named)
    }

    /// Raw numeric value of the mode.
    #[must_use]
    pub fn raw(self) -> u16 {
        match self {
            Self::Named(named) => named as u16,
            Self::Unknown(raw) => raw,
        }
    }
}

/// Private DEC modes with defined meaning on the output side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum NamedPrivateMode {
    CursorKeys = 1,
    /// DECANM. Resetting it drops the terminal into VT52 mode.
    AnsiMode = 2,
    SetNumberOfColumns = 3,
    ScreenMode = 5,
    Origin = 6,
    AutoWrap = 7,
    StartCursorBlink = 12,
    TextCursorEnable = 25,
    EnableColumnMode = 40,
    Vt200Mouse = 1000,
    ButtonEventMouse = 1002,
    AnyEventMouse = 1003,
    Utf8ExtendedMouse = 1005,
    SgrExtendedMouse = 1006,
    AlternateScroll = 1007,
    AlternateScreenBuffer = 1049,
    Win32InputMode = 9001,
}

/// Charset designators handed to the designate operations.
pub const CHARSET_DEC_SPECIAL_GRAPHICS: VtId = VtId::of("0");
pub const CHARSET_ASCII: VtId = VtId::of("B");

/// Coding systems selectable through `ESC % <F>`.
pub const CODING_SYSTEM_ISO2022: VtId = VtId::of("@");
pub const CODING_SYSTEM_UTF8: VtId = VtId::of("G");
