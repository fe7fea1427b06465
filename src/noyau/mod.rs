//! Noyau : infixe -> postfixe -> valeur
//!
//! Organisation interne :
//! - pile.rs      : pile LIFO à croissance par doublement
//! - erreur.rs    : ParseError (toutes les erreurs du noyau)
//! - jetons.rs    : tokenisation (moins réécrit en + négatif)
//! - rpn.rs       : précédences + shunting-yard
//! - postfixe.rs  : évaluation postfixe (pile d'opérandes)
//! - eval.rs      : pipeline complet

pub mod erreur;
pub mod eval;
pub mod jetons;
pub mod pile;
pub mod postfixe;
pub mod rpn;

#[cfg(test)]
mod tests_proprietes;


// API publique minimale
pub use erreur::ParseError;
pub use eval::{evaluate, evaluate_detaille, Detail};
