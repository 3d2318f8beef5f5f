//
// Generated file - DO NOT EDIT
// Generated from: translations.json
//

pub static EMBEDDED_TRANSLATIONS: &[(&str, &[(&str, &str)])] = &[
    ("home.title", &[
        ("en-US", "Home"),
        ("fr-FR", "Accueil"),
        ("es-ES", "Inicio"),
    ]),
    ("home.subtitle", &[
        ("en-US", "Welcome back"),
        ("fr-FR", "Bon retour"),
        ("es-ES", "Bienvenido de nuevo"),
    ]),
    ("button.save", &[
        ("en-US", "Save"),
        ("fr-FR", "Enregistrer"),
        ("es-ES", "Guardar"),
    ]),
    ("dialog.quote", &[
        ("en-US", "Say \"Hello\" there"),
        ("fr-FR", "Dites « bonjour »"),
    ]),
    ("hint.path", &[
        ("en-US", "Files are kept in C:\\Temp"),
    ]),
];
