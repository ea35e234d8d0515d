//! Static message tables, one per locale.
//!
//! The default locale ("eng") must contain every key used by the response
//! formatter; other locales may be partial and fall back to it.

/// A flat key/text table for one locale.
pub type MessageTable = &'static [(&'static str, &'static str)];

pub(crate) static ENG_MESSAGES: MessageTable = &[
    ("missing_parameters", "Some required parameters are missing"),
    ("already_exist", "This resource already exists"),
    ("not_found", "The requested resource was not found"),
    ("successfull_operation", "Operation completed successfully"),
    ("forbidden", "You are not allowed to perform this operation"),
    ("unauthorized", "Authentication is required"),
    ("422_error", "The request could not be processed"),
];

pub(crate) static FRA_MESSAGES: MessageTable = &[
    ("missing_parameters", "Certains paramètres requis sont manquants"),
    ("already_exist", "Cette ressource existe déjà"),
    ("not_found", "La ressource demandée est introuvable"),
    ("successfull_operation", "Opération effectuée avec succès"),
    ("forbidden", "Vous n'êtes pas autorisé à effectuer cette opération"),
    ("unauthorized", "Authentification requise"),
    ("422_error", "La requête n'a pas pu être traitée"),
];

// Partial on purpose: missing keys fall back to the default locale.
pub(crate) static SPA_MESSAGES: MessageTable = &[
    ("missing_parameters", "Faltan algunos parámetros requeridos"),
    ("already_exist", "Este recurso ya existe"),
    ("not_found", "No se encontró el recurso solicitado"),
    ("successfull_operation", "Operación completada con éxito"),
    ("unauthorized", "Se requiere autenticación"),
];
