use crate::common::ResolveError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Extension used for platforms without a dedicated output format.
pub const UNKNOWN_EXTENSION: &str = ".unknown";

/// Target platforms a build can be produced for.
///
/// The string form (used on the command line, in config files and in JSON
/// output) is the exact, case-sensitive name returned by [`Platform::as_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    #[serde(rename = "StandaloneOSX")]
    StandaloneOsx,
    StandaloneWindows,
    StandaloneWindows64,
    #[serde(rename = "iOS")]
    Ios,
    Android,
    StandaloneLinux,
    StandaloneLinux64,
    StandaloneLinuxUniversal,
    #[serde(rename = "WebGL")]
    WebGl,
    #[serde(rename = "WSAPlayer")]
    WsaPlayer,
    Tizen,
    #[serde(rename = "PSP2")]
    Psp2,
    #[serde(rename = "PS4")]
    Ps4,
    #[serde(rename = "PSM")]
    Psm,
    XboxOne,
    #[serde(rename = "N3DS")]
    N3ds,
    WiiU,
    #[serde(rename = "tvOS")]
    TvOs,
    Switch,
    NoTarget,
}

impl Platform {
    pub const ALL: [Platform; 20] = [
        Platform::StandaloneOsx,
        Platform::StandaloneWindows,
        Platform::StandaloneWindows64,
        Platform::Ios,
        Platform::Android,
        Platform::StandaloneLinux,
        Platform::StandaloneLinux64,
        Platform::StandaloneLinuxUniversal,
        Platform::WebGl,
        Platform::WsaPlayer,
        Platform::Tizen,
        Platform::Psp2,
        Platform::Ps4,
        Platform::Psm,
        Platform::XboxOne,
        Platform::N3ds,
        Platform::WiiU,
        Platform::TvOs,
        Platform::Switch,
        Platform::NoTarget,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Platform::StandaloneOsx => "StandaloneOSX",
            Platform::StandaloneWindows => "StandaloneWindows",
            Platform::StandaloneWindows64 => "StandaloneWindows64",
            Platform::Ios => "iOS",
            Platform::Android => "Android",
            Platform::StandaloneLinux => "StandaloneLinux",
            Platform::StandaloneLinux64 => "StandaloneLinux64",
            Platform::StandaloneLinuxUniversal => "StandaloneLinuxUniversal",
            Platform::WebGl => "WebGL",
            Platform::WsaPlayer => "WSAPlayer",
            Platform::Tizen => "Tizen",
            Platform::Psp2 => "PSP2",
            Platform::Ps4 => "PS4",
            Platform::Psm => "PSM",
            Platform::XboxOne => "XboxOne",
            Platform::N3ds => "N3DS",
            Platform::WiiU => "WiiU",
            Platform::TvOs => "tvOS",
            Platform::Switch => "Switch",
            Platform::NoTarget => "NoTarget",
        }
    }

    /// File extension of the build artifact, including the leading dot.
    ///
    /// iOS builds produce an Xcode project directory and get no extension.
    pub fn extension(self) -> &'static str {
        match self {
            Platform::StandaloneOsx => ".app",
            Platform::StandaloneWindows | Platform::StandaloneWindows64 => ".exe",
            Platform::Ios => "",
            Platform::Android => ".apk",
            Platform::StandaloneLinux
            | Platform::StandaloneLinux64
            | Platform::StandaloneLinuxUniversal
            | Platform::WebGl
            | Platform::WsaPlayer
            | Platform::Tizen
            | Platform::Psp2
            | Platform::Ps4
            | Platform::Psm
            | Platform::XboxOne
            | Platform::N3ds
            | Platform::WiiU
            | Platform::TvOs
            | Platform::Switch
            | Platform::NoTarget => UNKNOWN_EXTENSION,
        }
    }
}

impl FromStr for Platform {
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Platform::ALL
            .iter()
            .copied()
            .find(|platform| platform.as_str() == s)
            .ok_or_else(|| ResolveError::UnknownPlatform(s.to_string()))
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
