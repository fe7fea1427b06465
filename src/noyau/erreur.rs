// src/noyau/erreur.rs

use std::fmt;

use thiserror::Error;

use super::pile::PileVide;

/// Côté de la parenthèse orpheline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parenthese {
    Ouvrante,
    Fermante,
}

impl fmt::Display for Parenthese {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Parenthese::Ouvrante => write!(f, "("),
            Parenthese::Fermante => write!(f, ")"),
        }
    }
}

/// Toutes les erreurs du noyau. Aucune n'est rattrapée en interne :
/// la première détectée termine l'évaluation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("expression vide")]
    EmptyExpression,

    #[error("jeton inattendu '{0}'")]
    UnexpectedToken(char),

    #[error("nombre invalide '{0}'")]
    InvalidNumberLiteral(String),

    #[error("parenthèses non appariées '{0}'")]
    MismatchedParentheses(Parenthese),

    #[error("division par zéro")]
    DivisionByZero,

    #[error("expression invalide")]
    InvalidExpression,

    /// Invariant interne violé (bug, pas une faute de saisie).
    #[error("pile vide")]
    EmptyStack(#[from] PileVide),
}
