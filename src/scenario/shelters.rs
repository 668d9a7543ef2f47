//! Shelter-network actions: bed stock, casework, and prevention funds.

use crate::catalog::ActionDef;
use crate::core::field::Field;
use crate::core::role::Role;
use crate::core::state::HousingTier;

pub(super) fn actions() -> Vec<ActionDef> {
    vec![
        ActionDef::new("Emergency Expansion (beds +300)", Role::Shelters)
            .with_cost(Role::Shelters, 300.0)
            .with_build(HousingTier::Shelter, 300)
            .with_shrink(Field::PopFamilies, 10.0)
            .with_shrink(Field::PopVeterans, 12.0)
            .with_difficulty(0.35)
            .with_citation(
                "U.S. Department of Housing and Urban Development. Annual Homeless Assessment Report (AHAR). HUD Exchange. https://www.hudexchange.info/programs/hdx/ahar/",
            ),
        ActionDef::new("Community Partnership (vols & caseworkers)", Role::Shelters)
            .with_cost(Role::Shelters, 80.0)
            .with_delta(Field::SocialWorkers, 6.0)
            .with_shrink(Field::PopChronic, 1.5)
            .with_delta(Field::PolicyMomentum, 0.6)
            .with_difficulty(0.1)
            .with_citation(
                "Homeless Services Research Institute. Community Partnership Evaluation Studies. https://www.hsri.org/projects/evaluating-samhsa-four-homelessness-programs-and-resources",
            ),
        ActionDef::new("Housing First Pilot (perm +150)", Role::Shelters)
            .with_cost(Role::Shelters, 420.0)
            .with_build(HousingTier::Permanent, 150)
            .with_shrink(Field::PopChronic, 8.0)
            .with_delta(Field::PublicSupport, 2.5)
            .with_delta(Field::EconomyIndex, -1.5)
            .with_difficulty(0.45)
            .with_citation(
                "Conrad N. Hilton Foundation. Chronic Homelessness Initiative Evaluation. https://www.hiltonfoundation.org/learning/evaluation-of-housing-for-health-permanent-supportive-housing-program/",
            ),
        ActionDef::new("Volunteer Training (social workers +3)", Role::Shelters)
            .with_cost(Role::Shelters, 40.0)
            .with_delta(Field::SocialWorkers, 3.0)
            .with_delta(Field::PublicSupport, 1.0)
            .with_difficulty(0.05)
            .with_citation(
                "Homeless Services Research Institute. Caseworker Training Impact Study. https://www.hsri.org/projects/evaluating-samhsa-four-homelessness-programs-and-resources",
            ),
        ActionDef::new("Rent Assistance Fund (prevention)", Role::Shelters)
            .with_cost(Role::Shelters, 220.0)
            .with_shrink(Field::PopFamilies, 6.0)
            .with_shrink(Field::PopYouth, 4.0)
            .with_delta(Field::PolicyMomentum, 1.0)
            .with_delta(Field::PublicSupport, 1.8)
            .with_difficulty(0.25)
            .with_citation(
                "U.S. Department of Housing and Urban Development. Rapid Re-Housing Brief. HUD Exchange. https://www.hudexchange.info/resource/3891/rapid-re-housing-brief/",
            ),
        ActionDef::new("Defer Maintenance (gain budget, lose beds)", Role::Shelters)
            .with_delta(Field::Budget(Role::Shelters), 60.0)
            .with_delta(Field::ShelterCapacity, -40.0)
            .with_delta(Field::PublicSupport, -2.5)
            .with_delta(Field::LegalPressure, 2.0)
            .with_difficulty(0.1)
            .with_citation(
                "U.S. Department of Housing and Urban Development. Shelter Standards and Maintenance Requirements. HUD.gov.",
            ),
        ActionDef::new("Rapid Rehousing Boost", Role::Shelters)
            .with_cost(Role::Shelters, 200.0)
            .with_build(HousingTier::Transitional, 60)
            .with_shrink(Field::PopFamilies, 9.0)
            .with_delta(Field::PolicyMomentum, 1.2)
            .with_difficulty(0.25)
            .with_citation(
                "National Low Income Housing Coalition. The Gap: A Shortage of Affordable Homes. NLIHC. https://nlihc.org/gap",
            ),
        ActionDef::new("Add Outreach Vans", Role::Shelters)
            .with_cost(Role::Shelters, 90.0)
            .with_delta(Field::OutreachTeams, 2.0)
            .with_shrink(Field::PopYouth, 6.0)
            .with_difficulty(0.1)
            .with_citation(
                "Commonwealth Fund. Mobile Health Services for Homeless Populations. https://www.commonwealthfund.org/publications/case-study/2021/aug/how-medical-respite-care-program-offers-pathway-health-housing",
            ),
        ActionDef::new("Intensify Case Management", Role::Shelters)
            .with_cost(Role::Shelters, 120.0)
            .with_delta(Field::SocialWorkers, 5.0)
            .with_delta(Field::PolicyMomentum, 0.9)
            .with_shrink(Field::PopChronic, 5.0)
            .with_difficulty(0.15)
            .with_citation(
                "Homeless Services Research Institute. Case Management and Housing Stability Study. https://www.hsri.org/projects/evaluating-samhsa-four-homelessness-programs-and-resources",
            ),
        ActionDef::new("Sanction Encampment (sanctioned services)", Role::Shelters)
            .with_cost(Role::Shelters, 150.0)
            .with_build(HousingTier::Shelter, 80)
            .with_delta(Field::PublicSupport, -1.0)
            .with_delta(Field::LegalPressure, -2.5)
            .with_difficulty(0.3)
            .with_citation(
                "PubMed Central. Sanctioned Encampments and Harm Reduction. https://www.ncbi.nlm.nih.gov/pmc/articles/PMC8427990/",
            ),
        ActionDef::new("Partner: Medical Support (onsite clinics)", Role::Shelters)
            .with_cost(Role::Shelters, 160.0)
            .with_cost(Role::Medical, 60.0)
            .with_delta(Field::MedicalVans, 1.0)
            .with_shrink(Field::PopChronic, 7.0)
            .with_difficulty(0.25)
            .with_citation(
                "Commonwealth Fund. Integrating Health Care and Housing Services. https://www.commonwealthfund.org/publications/case-study/2021/aug/how-medical-respite-care-program-offers-pathway-health-housing",
            ),
        ActionDef::new("Evaluation & Data Sharing (with Univ)", Role::Shelters)
            .with_cost(Role::Shelters, 60.0)
            .with_cost(Role::University, 70.0)
            .with_delta(Field::PolicyMomentum, 1.6)
            .with_delta(Field::PublicSupport, 0.8)
            .with_difficulty(0.15)
            .with_citation(
                "United States Interagency Council on Homelessness. Data-Driven Decision Making. https://www.usich.gov/",
            ),
    ]
}
