//! Built-in onboarding question catalog
//!
//! Five questions shown during signup. The catalog is static data; a
//! deployment may replace it via configuration, but declaration order is
//! preserved wherever it is loaded from.

use crate::onboarding::question::{OnboardingOption, OnboardingQuestion, QuestionCategory};

/// The default onboarding questions, in presentation order
pub fn default_questions() -> Vec<OnboardingQuestion> {
    vec![
        OnboardingQuestion::new(
            "food-vibe",
            QuestionCategory::Food,
            "What gets you out the door for dinner?",
            3,
        )
        .with_option(
            OnboardingOption::new("street-eats", "Street eats & counter spots", "🌮")
                .with_tag("street-food")
                .with_tag("hole-in-the-wall"),
        )
        .with_option(
            OnboardingOption::new("omakase-night", "A tasting menu worth the splurge", "🍣")
                .with_tag("tasting-menu")
                .with_tag("foodie"),
        )
        .with_option(
            OnboardingOption::new("bottomless-brunch", "Weekend brunch with the group", "🥂")
                .with_tag("brunch")
                .with_tag("trendy"),
        )
        .with_option(
            OnboardingOption::new("heat-seeker", "The spiciest thing on the menu", "🌶️")
                .with_tag("spicy")
                .with_tag("foodie"),
        )
        .with_option(
            OnboardingOption::new("natural-wine", "A natural wine bar date", "🍷")
                .with_tag("wine")
                .with_tag("date-night"),
        ),
        OnboardingQuestion::new(
            "night-out",
            QuestionCategory::Events,
            "Your ideal Friday night looks like...",
            2,
        )
        .with_option(
            OnboardingOption::new("dance-floor", "Dancing until close", "🪩")
                .with_tag("club")
                .with_tag("dancing"),
        )
        .with_option(
            OnboardingOption::new("warehouse-set", "A DJ set somewhere in Brooklyn", "🎧")
                .with_tag("dj")
                .with_tag("late-night"),
        )
        .with_option(
            OnboardingOption::new("live-gig", "Live music and a good cocktail", "🎸")
                .with_tag("live-music")
                .with_tag("cocktails"),
        )
        .with_option(
            OnboardingOption::new("gallery-opening", "A gallery opening downtown", "🖼️")
                .with_tag("gallery")
                .with_tag("cultural"),
        )
        .with_option(
            OnboardingOption::new("trivia-night", "Trivia night at the local bar", "🧠")
                .with_tag("trivia")
                .with_tag("books"),
        ),
        OnboardingQuestion::new(
            "weekend-plans",
            QuestionCategory::Events,
            "Pick your perfect weekend plans",
            3,
        )
        .with_option(
            OnboardingOption::new("museum-morning", "A slow museum morning", "🏛️")
                .with_tag("museum")
                .with_tag("cultural"),
        )
        .with_option(
            OnboardingOption::new("author-talk", "An author talk or panel", "🎤")
                .with_tag("talks")
                .with_tag("learning"),
        )
        .with_option(
            OnboardingOption::new("park-picnic", "A picnic in the park", "🧺")
                .with_tag("park")
                .with_tag("picnic"),
        )
        .with_option(
            OnboardingOption::new("flea-market", "Digging through a flea market", "🛍️")
                .with_tag("markets")
                .with_tag("vintage"),
        )
        .with_option(
            OnboardingOption::new("broadway-matinee", "A matinee and a movie after", "🎭")
                .with_tag("theatre")
                .with_tag("film"),
        ),
        OnboardingQuestion::new(
            "neighborhood-energy",
            QuestionCategory::Places,
            "Which places do you gravitate toward?",
            2,
        )
        .with_option(
            OnboardingOption::new("rooftop-views", "Rooftops with a skyline view", "🌇")
                .with_tag("rooftop")
                .with_tag("views"),
        )
        .with_option(
            OnboardingOption::new("hidden-corners", "Spots nobody else knows about", "🗝️")
                .with_tag("hidden-gem")
                .with_tag("offbeat"),
        )
        .with_option(
            OnboardingOption::new("old-reliables", "The neighborhood old reliables", "🏘️")
                .with_tag("local")
                .with_tag("low-key"),
        )
        .with_option(
            OnboardingOption::new("just-opened", "Whatever just opened this month", "✨")
                .with_tag("new-restaurants")
                .with_tag("trendy"),
        ),
        OnboardingQuestion::new(
            "perfect-afternoon",
            QuestionCategory::Places,
            "A free afternoon in the city — where to?",
            3,
        )
        .with_option(
            OnboardingOption::new("coffee-crawl", "A coffee crawl on foot", "☕")
                .with_tag("coffee")
                .with_tag("walks"),
        )
        .with_option(
            OnboardingOption::new("bookstore-browse", "Getting lost in a bookstore", "📚")
                .with_tag("books")
                .with_tag("niche"),
        )
        .with_option(
            OnboardingOption::new("hands-on-workshop", "A hands-on class or workshop", "🛠️")
                .with_tag("workshops")
                .with_tag("learning"),
        )
        .with_option(
            OnboardingOption::new("greenway-stroll", "A stroll along the waterfront", "🌳")
                .with_tag("park")
                .with_tag("views"),
        )
        .with_option(
            OnboardingOption::new("photogenic-cafe", "That cafe from your feed", "📸")
                .with_tag("aesthetic")
                .with_tag("brunch"),
        ),
    ]
}
