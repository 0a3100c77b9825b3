//! Status transition rules shared by the promotion, demotion and job-offer
//! handlers.

use chrono::NaiveDate;

use crate::domain::models::job_offer::JobOffer;
use crate::domain::models::statut::{OfferStatut, TransitionStatut};
use crate::error::AppError;

/// Guard for `apply` and `cancel`: a record that already reached a terminal
/// state must not run its side effect again.
pub fn ensure_pending(statut: TransitionStatut) -> Result<(), AppError> {
    if statut.is_terminal() {
        return Err(AppError::Conflict(format!(
            "Transition impossible: statut déjà {statut}"
        )));
    }
    Ok(())
}

/// Lazy expiry: a published offer whose closing date has passed becomes
/// `Expirée`. Returns true when the offer changed and must be persisted.
/// Every read path goes through this, so no background job is needed.
pub fn refresh_offer(offer: &mut JobOffer, today: NaiveDate) -> bool {
    if offer.statut == OfferStatut::Publiee && offer.is_expired(today) {
        offer.statut = OfferStatut::Expiree;
        return true;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::job_offer::NewJobOfferParams;

    fn offer(statut: OfferStatut, date_cloture: NaiveDate) -> JobOffer {
        JobOffer::new(NewJobOfferParams {
            tenant_id: "t1".into(),
            user_id: "u1".into(),
            intitule: "Développeur".into(),
            poste: "Développeur".into(),
            departement: "IT".into(),
            type_contrat: "CDI".into(),
            competences_requises: "Rust".into(),
            date_cloture,
            statut,
            description: None,
            salaire: None,
            experience: None,
        })
    }

    #[test]
    fn pending_passes_terminal_rejected() {
        assert!(ensure_pending(TransitionStatut::EnAttente).is_ok());
        assert!(ensure_pending(TransitionStatut::Appliquee).is_err());
        assert!(ensure_pending(TransitionStatut::Annulee).is_err());
    }

    #[test]
    fn published_offer_expires_once_past_closing_date() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        let mut o = offer(OfferStatut::Publiee, today.pred_opt().unwrap());
        assert!(refresh_offer(&mut o, today));
        assert_eq!(o.statut, OfferStatut::Expiree);
        // Already expired: nothing further to persist.
        assert!(!refresh_offer(&mut o, today));
    }

    #[test]
    fn unpublished_offer_never_auto_expires() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        let mut o = offer(OfferStatut::NonPubliee, today.pred_opt().unwrap());
        assert!(!refresh_offer(&mut o, today));
        assert_eq!(o.statut, OfferStatut::NonPubliee);
    }

    #[test]
    fn filled_offer_keeps_status_past_closing_date() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        let mut o = offer(OfferStatut::Pourvue, today.pred_opt().unwrap());
        assert!(!refresh_offer(&mut o, today));
    }
}
