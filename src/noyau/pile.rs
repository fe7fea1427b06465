// src/noyau/pile.rs
//
// Pile LIFO à croissance par doublement.
//
// Invariants:
// - capacite() >= len() en permanence
// - débordement => la capacité (au moins) double AVANT de ranger l'élément,
//   les éléments existants gardent leur ordre

use thiserror::Error;

/// Capacité de départ d'une pile créée par `Pile::new()`.
pub const CAPACITE_INITIALE: usize = 2;

/// Dépiler / consulter une pile vide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("pile vide")]
pub struct PileVide;

#[derive(Clone, Debug)]
pub struct Pile<T> {
    elements: Vec<T>,
    capacite: usize,
}

impl<T> Default for Pile<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Pile<T> {
    pub fn new() -> Self {
        Self::with_capacity(CAPACITE_INITIALE)
    }

    /// Une capacité nulle est ramenée à 1 (sinon le doublement resterait à 0).
    pub fn with_capacity(capacite: usize) -> Self {
        let capacite = capacite.max(1);
        Self {
            elements: Vec::with_capacity(capacite),
            capacite,
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Capacité logique (politique de doublement), pas celle du Vec sous-jacent.
    pub fn capacite(&self) -> usize {
        self.capacite
    }

    pub fn push(&mut self, valeur: T) {
        if self.elements.len() >= self.capacite {
            self.capacite *= 2;
            let manque = self.capacite - self.elements.len();
            self.elements.reserve_exact(manque);
        }
        self.elements.push(valeur);
    }

    pub fn pop(&mut self) -> Result<T, PileVide> {
        self.elements.pop().ok_or(PileVide)
    }

    pub fn peek(&self) -> Result<&T, PileVide> {
        self.elements.last().ok_or(PileVide)
    }

    /// Comme `peek`, sans erreur : `None` si vide.
    pub fn try_peek(&self) -> Option<&T> {
        self.elements.last()
    }
}
