//! Closed constant sets shipped with the starter templates
//!
//! Pure static data with no behavior beyond membership and a stable string
//! form. The bootstrap pipeline never branches on these; they mirror the
//! constant tables the generated projects consume.

use std::fmt;

/// Text casing conventions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextCase {
    Camel,
    Lower,
    Pascal,
    Snake,
    Upper,
}

impl TextCase {
    pub const ALL: [TextCase; 5] = [
        TextCase::Camel,
        TextCase::Lower,
        TextCase::Pascal,
        TextCase::Snake,
        TextCase::Upper,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TextCase::Camel => "camel",
            TextCase::Lower => "lower",
            TextCase::Pascal => "pascal",
            TextCase::Snake => "snake",
            TextCase::Upper => "upper",
        }
    }
}

/// Unicode collation variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collation {
    Compat,
    Dict,
    Emoji,
    Eor,
    Phonebk,
    Phonetic,
    Pinyin,
    Reformed,
    Searchjl,
    Standard,
    Stroke,
    Trad,
    Unihan,
    Zhuyin,
}

impl Collation {
    pub const ALL: [Collation; 14] = [
        Collation::Compat,
        Collation::Dict,
        Collation::Emoji,
        Collation::Eor,
        Collation::Phonebk,
        Collation::Phonetic,
        Collation::Pinyin,
        Collation::Reformed,
        Collation::Searchjl,
        Collation::Standard,
        Collation::Stroke,
        Collation::Trad,
        Collation::Unihan,
        Collation::Zhuyin,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Collation::Compat => "compat",
            Collation::Dict => "dict",
            Collation::Emoji => "emoji",
            Collation::Eor => "eor",
            Collation::Phonebk => "phonebk",
            Collation::Phonetic => "phonetic",
            Collation::Pinyin => "pinyin",
            Collation::Reformed => "reformed",
            Collation::Searchjl => "searchjl",
            Collation::Standard => "standard",
            Collation::Stroke => "stroke",
            Collation::Trad => "trad",
            Collation::Unihan => "unihan",
            Collation::Zhuyin => "zhuyin",
        }
    }
}

/// Text direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::Ltr, Direction::Rtl];

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }
}

/// Deployment environments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Environment {
    Development,
    Mock,
    Ci,
    Qa,
    Alpha,
    Beta,
    Uat,
    Stage,
    Production,
}

impl Environment {
    pub const ALL: [Environment; 9] = [
        Environment::Development,
        Environment::Mock,
        Environment::Ci,
        Environment::Qa,
        Environment::Alpha,
        Environment::Beta,
        Environment::Uat,
        Environment::Stage,
        Environment::Production,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Mock => "mock",
            Environment::Ci => "ci",
            Environment::Qa => "qa",
            Environment::Alpha => "alpha",
            Environment::Beta => "beta",
            Environment::Uat => "uat",
            Environment::Stage => "stage",
            Environment::Production => "production",
        }
    }
}

/// Route paths served by the starter application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Index,
    Auth,
}

impl Route {
    pub const ALL: [Route; 2] = [Route::Index, Route::Auth];

    pub fn as_str(&self) -> &'static str {
        match self {
            Route::Index => "/",
            Route::Auth => "/auth",
        }
    }
}

macro_rules! impl_display {
    ($($name:ident),*) => {
        $(
            impl fmt::Display for $name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "{}", self.as_str())
                }
            }
        )*
    };
}

impl_display!(TextCase, Collation, Direction, Environment, Route);
