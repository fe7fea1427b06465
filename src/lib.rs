//! Calculatrice postfixe : noyau d’évaluation infixe -> postfixe -> valeur.
//!
//! Point d’entrée : [`noyau::evaluate`]. L’interface egui (binaire) s’appuie
//! sur [`noyau::evaluate_detaille`].

pub mod noyau;
