use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// Lifecycle of a promotion or demotion. `Appliquée` and `Annulée` are
/// terminal: once reached, neither `apply` nor `cancel` may run again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
pub enum TransitionStatut {
    #[serde(rename = "En attente")]
    #[sqlx(rename = "En attente")]
    EnAttente,
    #[serde(rename = "Appliquée")]
    #[sqlx(rename = "Appliquée")]
    Appliquee,
    #[serde(rename = "Annulée")]
    #[sqlx(rename = "Annulée")]
    Annulee,
}

impl TransitionStatut {
    pub fn is_terminal(&self) -> bool {
        matches!(self, TransitionStatut::Appliquee | TransitionStatut::Annulee)
    }
}

impl fmt::Display for TransitionStatut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TransitionStatut::EnAttente => "En attente",
            TransitionStatut::Appliquee => "Appliquée",
            TransitionStatut::Annulee => "Annulée",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
pub enum PaySlipStatut {
    #[serde(rename = "Générée")]
    #[sqlx(rename = "Générée")]
    Generee,
    #[serde(rename = "Annulée")]
    #[sqlx(rename = "Annulée")]
    Annulee,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
pub enum OfferStatut {
    #[serde(rename = "Publiée")]
    #[sqlx(rename = "Publiée")]
    Publiee,
    #[serde(rename = "Non publiée")]
    #[sqlx(rename = "Non publiée")]
    NonPubliee,
    #[serde(rename = "Expirée")]
    #[sqlx(rename = "Expirée")]
    Expiree,
    #[serde(rename = "Pourvue")]
    #[sqlx(rename = "Pourvue")]
    Pourvue,
}

impl FromStr for OfferStatut {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Publiée" => Ok(OfferStatut::Publiee),
            "Non publiée" => Ok(OfferStatut::NonPubliee),
            "Expirée" => Ok(OfferStatut::Expiree),
            "Pourvue" => Ok(OfferStatut::Pourvue),
            other => Err(AppError::Validation(format!("Statut d'offre invalide: {other}"))),
        }
    }
}

/// Application review state. Intentionally loose: an admin may move an
/// application between any of these at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
pub enum ApplicationStatut {
    #[serde(rename = "En attente")]
    #[sqlx(rename = "En attente")]
    EnAttente,
    #[serde(rename = "Acceptée")]
    #[sqlx(rename = "Acceptée")]
    Acceptee,
    #[serde(rename = "Rejetée")]
    #[sqlx(rename = "Rejetée")]
    Rejetee,
    #[serde(rename = "En cours")]
    #[sqlx(rename = "En cours")]
    EnCours,
}

impl FromStr for ApplicationStatut {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "En attente" => Ok(ApplicationStatut::EnAttente),
            "Acceptée" => Ok(ApplicationStatut::Acceptee),
            "Rejetée" => Ok(ApplicationStatut::Rejetee),
            "En cours" => Ok(ApplicationStatut::EnCours),
            other => Err(AppError::Validation(format!("Statut de candidature invalide: {other}"))),
        }
    }
}
