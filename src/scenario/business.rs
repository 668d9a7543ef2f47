//! Business-coalition actions: incentives, sponsorships, and sweeps.

use crate::catalog::ActionDef;
use crate::core::field::Field;
use crate::core::role::Role;
use crate::core::state::HousingTier;

pub(super) fn actions() -> Vec<ActionDef> {
    vec![
        ActionDef::new("Tax Incentives for Affordable Housing", Role::Business)
            .with_cost(Role::Business, 200.0)
            .with_build(HousingTier::Permanent, 120)
            .with_delta(Field::EconomyIndex, 1.8)
            .with_delta(Field::PublicSupport, 1.2)
            .with_difficulty(0.3)
            .with_citation(
                "National Alliance to End Homelessness. Developer Incentives and Housing Supply. https://endhomelessness.org/state-of-homelessness/",
            ),
        ActionDef::new("Fund Job Readiness Programs", Role::Business)
            .with_cost(Role::Business, 150.0)
            .with_shrink(Field::PopFamilies, 5.0)
            .with_shrink(Field::PopYouth, 12.0)
            .with_delta(Field::PublicSupport, 2.2)
            .with_difficulty(0.15)
            .with_citation(
                "National Alliance to End Homelessness. Employment and Housing Stability. https://endhomelessness.org/",
            ),
        ActionDef::new("Clean & Sweep (sanitation)", Role::Business)
            .with_cost(Role::Business, 70.0)
            .with_delta(Field::PublicSupport, 2.5)
            .with_displacement(0.4)
            .with_delta(Field::LegalPressure, 1.5)
            .with_difficulty(0.18)
            .with_citation(
                "National Alliance to End Homelessness. Encampment Clearances: Best Practices. https://endhomelessness.org/blog/punitive-policies-will-never-solve-homelessness-the-evidence-is-clear/",
            ),
        ActionDef::new("Public-Private Transitional Housing", Role::Business)
            .with_cost(Role::Business, 320.0)
            .with_build(HousingTier::Transitional, 90)
            .with_shrink(Field::PopFamilies, 4.0)
            .with_delta(Field::PublicSupport, 1.8)
            .with_difficulty(0.4)
            .with_citation(
                "PubMed Central. Public-Private Partnerships in Housing. https://www.ncbi.nlm.nih.gov/pmc/articles/PMC8899911",
            ),
        ActionDef::new("Lobby for Restrictive Ordinances", Role::Business)
            .with_cost(Role::Business, 100.0)
            .with_delta(Field::LegalPressure, 5.0)
            .with_delta(Field::EconomyIndex, 0.8)
            .with_displacement(0.7)
            .with_difficulty(0.3)
            .with_citation(
                "Berkeley Law Policy Advocacy Clinic. Anti-Homeless Ordinances and Constitutional Challenges. UC Berkeley School of Law. https://www.law.berkeley.edu/article/clinic-study-details-how-business-districts-target-homeless-people/",
            ),
        ActionDef::new("Volunteer Street Ambassadors", Role::Business)
            .with_cost(Role::Business, 80.0)
            .with_delta(Field::OutreachTeams, 2.0)
            .with_delta(Field::PublicSupport, 1.5)
            .with_shrink(Field::PopYouth, 5.0)
            .with_difficulty(0.1)
            .with_citation(
                "Taylor & Francis Online. Ambassador Programs and Service Connection. https://www.tandfonline.com/doi/full/10.1080/10439463.2024.2362730",
            ),
        ActionDef::new("Clean Streets + Social Service Coupling", Role::Business)
            .with_cost(Role::Business, 180.0)
            .with_delta(Field::PublicSupport, 2.8)
            .with_shrink(Field::PopChronic, 2.0)
            .with_difficulty(0.2)
            .with_citation(
                "PubMed Central. Coupled Services and Displacement Reduction. https://www.ncbi.nlm.nih.gov/pmc/articles/PMC8356292/",
            ),
        ActionDef::new("Small Business Microgrants to Hire", Role::Business)
            .with_cost(Role::Business, 120.0)
            .with_delta(Field::EconomyIndex, 1.2)
            .with_delta(Field::PublicSupport, 1.0)
            .with_difficulty(0.12)
            .with_citation(
                "PubMed Central. Hiring Incentives and Employment Pathways. https://www.ncbi.nlm.nih.gov/pmc/articles/PMC8356292/",
            ),
        ActionDef::new("Sponsor Transitional Unit Conversions", Role::Business)
            .with_cost(Role::Business, 240.0)
            .with_build(HousingTier::Transitional, 70)
            .with_delta(Field::PolicyMomentum, 0.9)
            .with_difficulty(0.3)
            .with_citation(
                "PubMed Central. Business Sponsorship Case Studies. https://www.ncbi.nlm.nih.gov/pmc/articles/PMC8899911",
            ),
        ActionDef::new("Support Low-Barrier Shelters", Role::Business)
            .with_cost(Role::Business, 160.0)
            .with_build(HousingTier::Shelter, 120)
            .with_shrink(Field::PopChronic, 3.0)
            .with_delta(Field::PublicSupport, 0.6)
            .with_difficulty(0.2)
            .with_citation(
                "PubMed Central. Low-Barrier Shelter Models and Health Outcomes. https://www.ncbi.nlm.nih.gov/pmc/articles/PMC7983925/",
            ),
        ActionDef::new("Coalition with Shelters for Employer Placement", Role::Business)
            .with_cost(Role::Business, 140.0)
            .with_shrink(Field::PopFamilies, 3.0)
            .with_delta(Field::PolicyMomentum, 0.5)
            .with_difficulty(0.15)
            .with_citation(
                "Homeless Services Research Institute. Employment Partnership Outcomes. https://www.hsri.org/projects/evaluating-samhsa-four-homelessness-programs-and-resources",
            ),
        ActionDef::new("Sponsor University Pilot (housing innovation)", Role::Business)
            .with_cost(Role::Business, 200.0)
            .with_cost(Role::University, 50.0)
            .with_delta(Field::TransitionalUnits, 40.0)
            .with_delta(Field::PolicyMomentum, 1.0)
            .with_difficulty(0.3)
            .with_citation(
                "Conrad N. Hilton Foundation. Housing Innovation Grant Programs. https://www.hiltonfoundation.org/learning/evaluation-of-housing-for-health-permanent-supportive-housing-program",
            ),
    ]
}
