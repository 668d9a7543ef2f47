//! Medical-coalition actions: clinics, treatment, and health outreach.

use crate::catalog::ActionDef;
use crate::core::field::Field;
use crate::core::role::Role;
use crate::core::state::HousingTier;

pub(super) fn actions() -> Vec<ActionDef> {
    vec![
        ActionDef::new("Deploy Mobile Clinics", Role::Medical)
            .with_cost(Role::Medical, 160.0)
            .with_delta(Field::MedicalVans, 2.0)
            .with_shrink(Field::PopChronic, 6.0)
            .with_delta(Field::PublicSupport, 2.8)
            .with_difficulty(0.15)
            .with_citation(
                "Commonwealth Fund. Mobile Health Clinics for Homeless Populations. https://www.commonwealthfund.org/publications/case-study/2021/aug/how-medical-respite-care-program-offers-pathway-health-housing",
            ),
        ActionDef::new("Medicaid & Benefits Enrollment Drive", Role::Medical)
            .with_cost(Role::Medical, 140.0)
            .with_shrink(Field::PopChronic, 7.0)
            .with_delta(Field::PolicyMomentum, 1.2)
            .with_difficulty(0.15)
            .with_citation(
                "Substance Abuse and Mental Health Services Administration. Benefits Enrollment and Housing Stability. https://www.samhsa.gov/",
            ),
        ActionDef::new("Substance Use Treatment Expansion", Role::Medical)
            .with_cost(Role::Medical, 260.0)
            .with_shrink(Field::PopChronic, 12.0)
            .with_delta(Field::PublicSupport, -1.0)
            .with_delta(Field::PolicyMomentum, 2.8)
            .with_difficulty(0.35)
            .with_citation(
                "Homeless Services Research Institute. Substance Use Treatment and Housing First Models. https://www.hsri.org/projects/evaluating-samhsa-four-homelessness-programs-and-resources",
            ),
        ActionDef::new("Medical Respite & Recovery Beds", Role::Medical)
            .with_cost(Role::Medical, 220.0)
            .with_build(HousingTier::Shelter, 80)
            .with_shrink(Field::PopChronic, 5.0)
            .with_difficulty(0.3)
            .with_citation(
                "Commonwealth Fund. Medical Respite Programs for Homeless Populations. https://www.commonwealthfund.org/publications/case-study/2021/aug/how-medical-respite-care-program-offers-pathway-health-housing",
            ),
        ActionDef::new("Behavioral Health Outreach Teams", Role::Medical)
            .with_cost(Role::Medical, 180.0)
            .with_delta(Field::OutreachTeams, 2.0)
            .with_shrink(Field::PopYouth, 8.0)
            .with_delta(Field::PolicyMomentum, 1.3)
            .with_difficulty(0.2)
            .with_citation(
                "Substance Abuse and Mental Health Services Administration. Behavioral Health Outreach Models. https://www.samhsa.gov/",
            ),
        ActionDef::new("Hospital Discharge Coordination", Role::Medical)
            .with_cost(Role::Medical, 100.0)
            .with_shrink(Field::PopChronic, 3.0)
            .with_delta(Field::PublicSupport, 0.7)
            .with_difficulty(0.1)
            .with_citation(
                "Commonwealth Fund. Hospital Discharge Planning and Homelessness Prevention. https://www.commonwealthfund.org/publications/case-study/2021/aug/how-medical-respite-care-program-offers-pathway-health-housing",
            ),
        ActionDef::new("Expand Telehealth for Unhoused", Role::Medical)
            .with_cost(Role::Medical, 70.0)
            .with_delta(Field::PolicyMomentum, 0.6)
            .with_delta(Field::PublicSupport, 0.5)
            .with_difficulty(0.08)
            .with_citation(
                "PubMed Central. Telehealth Access for Homeless Populations. https://www.ncbi.nlm.nih.gov/pmc/articles/PMC6153151",
            ),
        ActionDef::new("Create Medical-Legal Partnerships", Role::Medical)
            .with_cost(Role::Medical, 90.0)
            .with_delta(Field::LegalPressure, -1.5)
            .with_delta(Field::PolicyMomentum, 0.7)
            .with_difficulty(0.12)
            .with_citation(
                "PubMed Central. Medical-Legal Partnerships and Housing Stability. https://www.ncbi.nlm.nih.gov/pmc/articles/PMC8356292",
            ),
        ActionDef::new("Partner with Shelters for Onsite Clinics", Role::Medical)
            .with_cost(Role::Medical, 120.0)
            .with_delta(Field::MedicalVans, 1.0)
            .with_shrink(Field::PopChronic, 4.0)
            .with_difficulty(0.15)
            .with_citation(
                "PubMed Central. Shelter-Based Health Services. https://www.ncbi.nlm.nih.gov/pmc/articles/PMC8356292",
            ),
        ActionDef::new("Performance-based Funding for Treatment Outcomes", Role::Medical)
            .with_cost(Role::Medical, 200.0)
            .with_delta(Field::PolicyMomentum, 1.8)
            .with_delta(Field::PublicSupport, -0.8)
            .with_difficulty(0.25)
            .with_citation(
                "Homeless Services Research Institute. Performance-Based Contracting in Health Services. https://www.hsri.org/projects/evaluating-samhsa-four-homelessness-programs-and-resources",
            ),
        ActionDef::new("Veterans Health Focus", Role::Medical)
            .with_cost(Role::Medical, 130.0)
            .with_shrink(Field::PopVeterans, 10.0)
            .with_delta(Field::PolicyMomentum, 1.0)
            .with_difficulty(0.12)
            .with_citation(
                "U.S. Department of Veterans Affairs. Ending Veteran Homelessness. https://www.va.gov/homeless/",
            ),
        ActionDef::new("Evaluation of Health Interventions (data)", Role::Medical)
            .with_cost(Role::Medical, 60.0)
            .with_cost(Role::University, 40.0)
            .with_delta(Field::PolicyMomentum, 1.4)
            .with_delta(Field::PublicSupport, 0.6)
            .with_difficulty(0.1)
            .with_citation(
                "Homeless Services Research Institute. Health Intervention Evaluation Framework. https://www.hsri.org/projects/evaluating-samhsa-four-homelessness-programs-and-resources",
            ),
    ]
}
