//! University actions: research, evaluation, and student capacity.

use crate::catalog::ActionDef;
use crate::core::field::Field;
use crate::core::role::Role;
use crate::core::state::HousingTier;

pub(super) fn actions() -> Vec<ActionDef> {
    vec![
        ActionDef::new("Research & Program Evaluation", Role::University)
            .with_cost(Role::University, 80.0)
            .with_delta(Field::PolicyMomentum, 1.5)
            .with_difficulty(0.08)
            .with_citation(
                "PubMed Central. Academic Research and Homeless Policy. https://www.ncbi.nlm.nih.gov/pmc/articles/PMC1525292/",
            ),
        ActionDef::new("Service-Learning & Workforce Integration", Role::University)
            .with_cost(Role::University, 90.0)
            .with_delta(Field::SocialWorkers, 5.0)
            .with_shrink(Field::PopYouth, 10.0)
            .with_delta(Field::PublicSupport, 1.2)
            .with_difficulty(0.1)
            .with_citation(
                "United States Interagency Council on Homelessness. Service-Learning and Capacity Expansion. https://www.usich.gov/sites/default/files/document/Evidence-Behind-Approaches-That-End-Homelessness-Brief-2019.pdf",
            ),
        ActionDef::new("Housing Innovation Lab (modular units)", Role::University)
            .with_cost(Role::University, 200.0)
            .with_build(HousingTier::Transitional, 70)
            .with_shrink(Field::PopChronic, 3.0)
            .with_delta(Field::PolicyMomentum, 2.0)
            .with_difficulty(0.3)
            .with_citation(
                "Conrad N. Hilton Foundation. Housing Innovation Grant Programs. https://www.hiltonfoundation.org/learning/evaluation-of-housing-for-health-permanent-supportive-housing-program",
            ),
        ActionDef::new("Reputation Management (PR)", Role::University)
            .with_cost(Role::University, 60.0)
            .with_delta(Field::PublicSupport, 0.6)
            .with_delta(Field::PolicyMomentum, -0.4)
            .with_difficulty(0.08)
            .with_citation(
                "PubMed Central. University-Community Relations. https://www.ncbi.nlm.nih.gov/pmc/articles/PMC1525292/",
            ),
        ActionDef::new("Open Data & Dashboard (public transparency)", Role::University)
            .with_cost(Role::University, 50.0)
            .with_delta(Field::PolicyMomentum, 0.8)
            .with_delta(Field::PublicSupport, 0.5)
            .with_difficulty(0.05)
            .with_citation(
                "United States Interagency Council on Homelessness. Data Standards and Systems. https://www.usich.gov/",
            ),
        ActionDef::new("Student Outreach & Volunteer Corps", Role::University)
            .with_cost(Role::University, 70.0)
            .with_delta(Field::OutreachTeams, 2.0)
            .with_shrink(Field::PopYouth, 6.0)
            .with_delta(Field::PublicSupport, 1.0)
            .with_difficulty(0.08)
            .with_citation(
                "United States Interagency Council on Homelessness. Student Volunteer Programs. https://www.usich.gov/sites/default/files/document/Evidence-Behind-Approaches-That-End-Homelessness-Brief-2019.pdf",
            ),
        ActionDef::new("Policy Incubator with City (pilot)", Role::University)
            .with_cost(Role::University, 160.0)
            .with_cost(Role::Neighborhoods, 40.0)
            .with_delta(Field::PermanentUnits, 30.0)
            .with_delta(Field::PolicyMomentum, 1.6)
            .with_difficulty(0.25)
            .with_citation(
                "United States Interagency Council on Homelessness. University-City Collaborations. https://www.usich.gov/sites/default/files/document/Evidence-Behind-Approaches-That-End-Homelessness-Brief-2019.pdf",
            ),
        ActionDef::new("Deploy Evaluation Fellows to Shelters", Role::University)
            .with_cost(Role::University, 90.0)
            .with_delta(Field::SocialWorkers, 2.0)
            .with_delta(Field::PolicyMomentum, 1.0)
            .with_difficulty(0.1)
            .with_citation(
                "Homeless Services Research Institute. Fellowship Program Evaluations. https://www.hsri.org/projects/evaluating-samhsa-four-homelessness-programs-and-resources",
            ),
        ActionDef::new("Community-engaged Research on Displacement", Role::University)
            .with_cost(Role::University, 120.0)
            .with_delta(Field::PolicyMomentum, 1.8)
            .with_delta(Field::PublicSupport, 0.5)
            .with_difficulty(0.15)
            .with_citation(
                "PubMed Central. Community-Based Participatory Research. https://www.ncbi.nlm.nih.gov/pmc/articles/PMC1525292/",
            ),
        ActionDef::new("Leverage Philanthropy for PSH", Role::University)
            .with_cost(Role::University, 200.0)
            .with_build(HousingTier::Permanent, 50)
            .with_delta(Field::PolicyMomentum, 1.2)
            .with_difficulty(0.3)
            .with_citation(
                "Conrad N. Hilton Foundation. Permanent Supportive Housing Initiative Evaluation. https://www.hiltonfoundation.org/learning/evaluation-of-housing-for-health-permanent-supportive-housing-program",
            ),
        ActionDef::new("Student-led Rapid Rehousing Pilot", Role::University)
            .with_cost(Role::University, 100.0)
            .with_delta(Field::TransitionalUnits, 40.0)
            .with_shrink(Field::PopYouth, 8.0)
            .with_difficulty(0.15)
            .with_citation(
                "National Low Income Housing Coalition. Student-led Housing Programs. https://nlihc.org/sites/default/files/Housing-First-Evidence.pdf",
            ),
        ActionDef::new("Academic Advocacy Campaign", Role::University)
            .with_cost(Role::University, 60.0)
            .with_delta(Field::PublicSupport, 0.9)
            .with_delta(Field::PolicyMomentum, 0.6)
            .with_difficulty(0.08)
            .with_citation(
                "National Low Income Housing Coalition. Advocacy Toolkit. https://nlihc.org/",
            ),
    ]
}
