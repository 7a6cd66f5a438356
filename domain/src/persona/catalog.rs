//! Built-in persona catalog
//!
//! Seven personas in a fixed order. Order matters: the selector breaks
//! score ties in favor of the earlier-declared persona, so reordering this
//! list changes tie behavior.
//!
//! Tag overlap between personas ("talks" in both Culture & Arts Lover and
//! Curious Mind, "hole-in-the-wall" in both Foodie Adventurer and Hidden
//! Gem Hunter) is intentional: shared tags are what let a runner-up score
//! high enough to surface as a secondary persona.

use crate::persona::entities::Persona;

/// The default personas, in tie-break order
pub fn default_personas() -> Vec<Persona> {
    vec![
        Persona::new("foodie-adventurer", "Foodie Adventurer", "🍜")
            .with_description("You plan trips around restaurants, not the other way around.")
            .with_reveal_comment("Your camera roll is 80% food and we respect it.")
            .with_tag("foodie")
            .with_tag("street-food")
            .with_tag("tasting-menu")
            .with_tag("spicy")
            .with_tag("new-restaurants")
            .with_tag("hole-in-the-wall"),
        Persona::new("trendy-socialite", "Trendy Socialite", "✨")
            .with_description("If it has a wait list and a signature spritz, you're there.")
            .with_reveal_comment("The group chat relies on you for reservations.")
            .with_tag("trendy")
            .with_tag("brunch")
            .with_tag("rooftop")
            .with_tag("aesthetic")
            .with_tag("date-night")
            .with_tag("wine"),
        Persona::new("nightlife-explorer", "Nightlife Explorer", "🪩")
            .with_description("The night doesn't start until most people's ends.")
            .with_reveal_comment("We'll see you at the function.")
            .with_tag("club")
            .with_tag("dj")
            .with_tag("dancing")
            .with_tag("late-night")
            .with_tag("live-music")
            .with_tag("cocktails"),
        Persona::new("culture-arts-lover", "Culture & Arts Lover", "🎭")
            .with_description("Museums, matinees, and member previews are your cardio.")
            .with_reveal_comment("You've definitely cried at the Met. It's fine.")
            .with_tag("museum")
            .with_tag("gallery")
            .with_tag("cultural")
            .with_tag("theatre")
            .with_tag("talks")
            .with_tag("film"),
        Persona::new("chill-explorer", "Chill Explorer", "🌳")
            .with_description("Good coffee, a long walk, and nowhere to be.")
            .with_reveal_comment("Your ideal plan is technically no plan.")
            .with_tag("park")
            .with_tag("picnic")
            .with_tag("walks")
            .with_tag("coffee")
            .with_tag("low-key")
            .with_tag("views"),
        Persona::new("curious-mind", "Curious Mind", "📚")
            .with_description("You collect facts, workshops, and niche obsessions.")
            .with_reveal_comment("Yes, we saw the trivia win streak.")
            .with_tag("talks")
            .with_tag("books")
            .with_tag("workshops")
            .with_tag("trivia")
            .with_tag("learning")
            .with_tag("niche"),
        Persona::new("hidden-gem-hunter", "Hidden Gem Hunter", "🗝️")
            .with_description("If it's on every list, you've already moved on.")
            .with_reveal_comment("Don't worry, we won't tell anyone about your spot.")
            .with_tag("hidden-gem")
            .with_tag("local")
            .with_tag("offbeat")
            .with_tag("vintage")
            .with_tag("markets")
            .with_tag("hole-in-the-wall"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tag::Tag;
    use std::collections::HashSet;

    #[test]
    fn test_seven_personas() {
        assert_eq!(default_personas().len(), 7);
    }

    #[test]
    fn test_persona_ids_unique() {
        let personas = default_personas();
        let ids: HashSet<_> = personas.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), personas.len());
    }

    #[test]
    fn test_every_persona_has_tags_and_flavor_text() {
        for persona in default_personas() {
            assert!(!persona.tags.is_empty(), "{}", persona.id);
            assert!(!persona.description.is_empty(), "{}", persona.id);
            assert!(!persona.reveal_comment.is_empty(), "{}", persona.id);
        }
    }

    #[test]
    fn test_intentional_tag_overlap() {
        let personas = default_personas();
        let talks = Tag::new("talks");
        let holders: Vec<_> = personas.iter().filter(|p| p.has_tag(&talks)).collect();
        assert_eq!(holders.len(), 2);
    }

    #[test]
    fn test_nightlife_tags_are_exclusive() {
        // Scenario: {club, dj, dancing} must score 3 for Nightlife Explorer
        // and 0 for everyone else, so these tags belong to exactly one persona.
        let personas = default_personas();
        for tag in ["club", "dj", "dancing"] {
            let tag = Tag::new(tag);
            let holders = personas.iter().filter(|p| p.has_tag(&tag)).count();
            assert_eq!(holders, 1, "{tag}");
        }
    }

    #[test]
    fn test_every_option_tag_scores_somewhere() {
        // Every tag reachable from the onboarding catalog should belong to
        // at least one persona, otherwise picking it never moves a score.
        let personas = default_personas();
        for question in crate::onboarding::default_questions() {
            for option in &question.options {
                for tag in &option.tags {
                    assert!(
                        personas.iter().any(|p| p.has_tag(tag)),
                        "tag '{}' from {}/{} scores nowhere",
                        tag,
                        question.id,
                        option.id
                    );
                }
            }
        }
    }
}
