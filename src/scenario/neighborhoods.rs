//! Neighborhood-association actions, from voucher funds to NIMBY blocks.

use crate::catalog::ActionDef;
use crate::core::field::Field;
use crate::core::role::Role;
use crate::core::state::HousingTier;

pub(super) fn actions() -> Vec<ActionDef> {
    vec![
        ActionDef::new("Media Campaign (reframe homelessness)", Role::Neighborhoods)
            .with_cost(Role::Neighborhoods, 120.0)
            .with_delta(Field::PublicSupport, 6.0)
            .with_delta(Field::LegalPressure, -3.0)
            .with_difficulty(0.15)
            .with_citation(
                "SAGE Journals. Reframing Homelessness in Public Discourse. https://journals.sagepub.com/doi/10.1177/0739456X241265499",
            ),
        ActionDef::new("Block New Low-Income Development (NIMBY action)", Role::Neighborhoods)
            .with_cost(Role::Neighborhoods, 40.0)
            .with_delta(Field::PermanentUnits, -50.0)
            .with_delta(Field::PublicSupport, 2.0)
            .with_delta(Field::LegalPressure, 4.0)
            .with_difficulty(0.2)
            .with_citation(
                "Berkeley Law Policy Advocacy Clinic. Homeless Exclusion and Legal Conflict Study. UC Berkeley School of Law. https://www.law.berkeley.edu/article/clinic-study-details-how-business-districts-target-homeless-people/",
            ),
        ActionDef::new("Local Voucher Matching Fund", Role::Neighborhoods)
            .with_cost(Role::Neighborhoods, 180.0)
            .with_shrink(Field::PopFamilies, 7.0)
            .with_delta(Field::PermanentUnits, 20.0)
            .with_delta(Field::PolicyMomentum, 0.8)
            .with_delta(Field::PublicSupport, 3.0)
            .with_difficulty(0.2)
            .with_citation(
                "U.S. Department of Housing and Urban Development. Housing Choice Voucher Program. https://www.hud.gov/program_offices/public_indian_housing/programs/hcv",
            ),
        ActionDef::new("Civic Forum (reduce tensions)", Role::Neighborhoods)
            .with_cost(Role::Neighborhoods, 30.0)
            .with_delta(Field::LegalPressure, -2.0)
            .with_delta(Field::PublicSupport, 1.0)
            .with_difficulty(0.05)
            .with_citation(
                "SAGE Journals. Community Engagement and Homelessness Response. https://journals.sagepub.com/doi/10.1177/10986111241289390",
            ),
        ActionDef::new("Fund Private Security (pushout)", Role::Neighborhoods)
            .with_cost(Role::Neighborhoods, 90.0)
            .with_delta(Field::PublicSupport, 3.0)
            .with_displacement(0.6)
            .with_delta(Field::LegalPressure, 2.0)
            .with_difficulty(0.25)
            .with_citation(
                "Berkeley Law Policy Advocacy Clinic. The Criminalization of Homelessness in California. UC Berkeley School of Law. https://www.law.berkeley.edu/article/clinic-study-details-how-business-districts-target-homeless-people/",
            ),
        ActionDef::new("Infrastructure Grants (convert trans->perm)", Role::Neighborhoods)
            .with_cost(Role::Neighborhoods, 240.0)
            .with_delta(Field::TransitionalUnits, -80.0)
            .with_build(HousingTier::Permanent, 72)
            .with_shrink(Field::PopFamilies, 1.0)
            .with_delta(Field::PolicyMomentum, 1.5)
            .with_difficulty(0.3)
            .with_citation(
                "RTI International. Capital Funding and Affordable Housing Development. https://www.rti.org/publication/a-review-of-the-literature-on-neighborhood-impacts-of-permanent-s",
            ),
        ActionDef::new("Community Food & Outreach Sponsorship", Role::Neighborhoods)
            .with_cost(Role::Neighborhoods, 60.0)
            .with_delta(Field::OutreachTeams, 1.0)
            .with_delta(Field::PublicSupport, 1.2)
            .with_shrink(Field::PopYouth, 3.0)
            .with_difficulty(0.08)
            .with_citation(
                "PubMed Central. Community Outreach Programs. https://www.ncbi.nlm.nih.gov/pmc/articles/PMC8427990/",
            ),
        ActionDef::new("Neighborhood Rapid Response to Eviction Spikes", Role::Neighborhoods)
            .with_cost(Role::Neighborhoods, 200.0)
            .with_shrink(Field::PopFamilies, 10.0)
            .with_delta(Field::PolicyMomentum, 1.0)
            .with_difficulty(0.25)
            .with_citation(
                "National Low Income Housing Coalition. Eviction Prevention Programs. https://nlihc.org/",
            ),
        ActionDef::new("Public Space Design (reduce congregation)", Role::Neighborhoods)
            .with_cost(Role::Neighborhoods, 140.0)
            .with_delta(Field::PublicSupport, 1.6)
            .with_delta(Field::LegalPressure, -1.2)
            .with_difficulty(0.15)
            .with_citation(
                "Taylor & Francis Online. Hostile Architecture and Public Space Management. https://www.tandfonline.com/doi/full/10.1080/10439463.2024.2362730",
            ),
        ActionDef::new(
            "Property Value Assistance (tax incentive to support programs)",
            Role::Neighborhoods,
        )
            .with_cost(Role::Neighborhoods, 200.0)
            .with_delta(Field::PermanentUnits, 30.0)
            .with_delta(Field::PublicSupport, 0.9)
            .with_difficulty(0.2)
            .with_citation(
                "Housing Infrastructure Canada. Neighborhood Housing Incentives. https://housing-infrastructure.canada.ca/homelessness-sans-abri/reports-rapports/shelter-cap-hebergement-2024-eng.html",
            ),
        ActionDef::new("Neighborhood-led Transitional Housing Project", Role::Neighborhoods)
            .with_cost(Role::Neighborhoods, 260.0)
            .with_build(HousingTier::Transitional, 90)
            .with_shrink(Field::PopFamilies, 6.0)
            .with_delta(Field::PolicyMomentum, 1.2)
            .with_difficulty(0.35)
            .with_citation(
                "U.S. Department of Housing and Urban Development. Transitional Housing Evaluation. HUD Exchange. https://www.huduser.gov/portal/publications/pdf/lifeaftertransition.pdf",
            ),
        ActionDef::new("Neighborhood Monitoring & Data (complaint tracking)", Role::Neighborhoods)
            .with_cost(Role::Neighborhoods, 40.0)
            .with_delta(Field::LegalPressure, -0.8)
            .with_delta(Field::PublicSupport, 0.4)
            .with_difficulty(0.05)
            .with_citation(
                "SAGE Journals. Data & Transparent Monitoring. https://journals.sagepub.com/doi/10.1177/0739456X241265499",
            ),
    ]
}
