//! Token values for the themes bundled with the tool.

use super::types::{Scheme, Theme, ThemeDefinition};

const fn light(
    base: &'static str,
    surface: &'static str,
    text: &'static str,
    primary: &'static str,
    secondary: &'static str,
    accent: &'static str,
) -> Theme {
    Theme {
        scheme: Scheme::Light,
        base,
        surface,
        text,
        primary,
        secondary,
        accent,
    }
}

const fn dark(
    base: &'static str,
    surface: &'static str,
    text: &'static str,
    primary: &'static str,
    secondary: &'static str,
    accent: &'static str,
) -> Theme {
    Theme {
        scheme: Scheme::Dark,
        base,
        surface,
        text,
        primary,
        secondary,
        accent,
    }
}

/// Every built-in theme in catalog order. The order is the display order
/// used by listings and by configurations that enable the full set.
pub static BUILT_IN_DEFINITIONS: [ThemeDefinition; 29] = [
    ThemeDefinition {
        name: "light",
        theme: light("#ffffff", "#f2f2f2", "#1f2937", "#570df8", "#f000b8", "#37cdbe"),
    },
    ThemeDefinition {
        name: "dark",
        theme: dark("#1d232a", "#191e24", "#a6adbb", "#661ae6", "#d926aa", "#1fb2a6"),
    },
    ThemeDefinition {
        name: "cupcake",
        theme: light("#faf7f5", "#efeae6", "#291334", "#65c3c8", "#ef9fbc", "#eeaf3a"),
    },
    ThemeDefinition {
        name: "bumblebee",
        theme: light("#ffffff", "#f9f9f9", "#181830", "#e0a82e", "#f9d72f", "#181830"),
    },
    ThemeDefinition {
        name: "emerald",
        theme: light("#ffffff", "#e8e8e8", "#333c4d", "#66cc8a", "#377cfb", "#ea5234"),
    },
    ThemeDefinition {
        name: "corporate",
        theme: light("#ffffff", "#f3f4f6", "#181a2a", "#4b6bfb", "#7b92b2", "#67cba0"),
    },
    ThemeDefinition {
        name: "synthwave",
        theme: dark("#2d1b69", "#241350", "#f9f7fd", "#e779c1", "#58c7f3", "#f3cc30"),
    },
    ThemeDefinition {
        name: "retro",
        theme: light("#e4d8b4", "#d2c59d", "#282425", "#ef9995", "#a4cbb4", "#dc8850"),
    },
    ThemeDefinition {
        name: "cyberpunk",
        theme: light("#ffee00", "#f2e200", "#1a1a1a", "#ff7598", "#75d1f0", "#c07eec"),
    },
    ThemeDefinition {
        name: "valentine",
        theme: light("#fae7f4", "#f3d9e7", "#632c3b", "#e96d7b", "#a991f7", "#88dbdd"),
    },
    ThemeDefinition {
        name: "halloween",
        theme: dark("#212121", "#1b1b1b", "#d6d6d6", "#f28c18", "#6d3a9c", "#51a800"),
    },
    ThemeDefinition {
        name: "garden",
        theme: light("#e9e7e7", "#dcd8d8", "#100f0f", "#5c7f67", "#ecf4e7", "#fae5e5"),
    },
    ThemeDefinition {
        name: "forest",
        theme: dark("#171212", "#130f0f", "#cbc9c9", "#1eb854", "#1db88e", "#1db8ab"),
    },
    ThemeDefinition {
        name: "aqua",
        theme: light("#345da7", "#2a4a86", "#d4ddf4", "#09ecf3", "#966fb3", "#ffe999"),
    },
    ThemeDefinition {
        name: "lofi",
        theme: light("#ffffff", "#f2f2f2", "#000000", "#0d0d0d", "#1a1919", "#262626"),
    },
    ThemeDefinition {
        name: "pastel",
        theme: light("#ffffff", "#f9fafb", "#5b5b5b", "#d1c1d7", "#f6cbd1", "#b4e9d6"),
    },
    ThemeDefinition {
        name: "fantasy",
        theme: light("#ffffff", "#f3f3f3", "#1f2937", "#6e0b75", "#007ebd", "#f8860d"),
    },
    ThemeDefinition {
        name: "wireframe",
        theme: light("#ffffff", "#eeeeee", "#161616", "#b8b8b8", "#b8b8b8", "#b8b8b8"),
    },
    ThemeDefinition {
        name: "black",
        theme: dark("#000000", "#0d0d0d", "#d6d6d6", "#373737", "#373737", "#373737"),
    },
    ThemeDefinition {
        name: "luxury",
        theme: dark("#09090b", "#171618", "#dca54c", "#ffffff", "#152747", "#513448"),
    },
    ThemeDefinition {
        name: "dracula",
        theme: dark("#282a36", "#232530", "#f8f8f2", "#ff79c6", "#bd93f9", "#ffb86c"),
    },
    ThemeDefinition {
        name: "cmyk",
        theme: light("#ffffff", "#f2f2f2", "#1a1a1a", "#45aeee", "#e8488a", "#fff232"),
    },
    ThemeDefinition {
        name: "autumn",
        theme: light("#f1f1f1", "#e4e4e4", "#30241a", "#8c0327", "#d85251", "#d59b6a"),
    },
    ThemeDefinition {
        name: "business",
        theme: dark("#202020", "#1b1b1b", "#cacaca", "#1c4e80", "#7c909a", "#ea6947"),
    },
    ThemeDefinition {
        name: "acid",
        theme: light("#fafafa", "#efefef", "#181830", "#ff00f4", "#ff7400", "#cbfd03"),
    },
    ThemeDefinition {
        name: "lemonade",
        theme: light("#ffffff", "#f8fdef", "#151515", "#519903", "#e9e92e", "#f7f9ca"),
    },
    ThemeDefinition {
        name: "night",
        theme: dark("#0f172a", "#0b1120", "#b3c5ef", "#38bdf8", "#818cf8", "#f471b5"),
    },
    ThemeDefinition {
        name: "coffee",
        theme: dark("#20161f", "#1a121a", "#c59f60", "#db924b", "#263e3f", "#10576d"),
    },
    ThemeDefinition {
        name: "winter",
        theme: light("#ffffff", "#f1f5f9", "#394e6a", "#047aff", "#463aa2", "#c148ac"),
    },
];
