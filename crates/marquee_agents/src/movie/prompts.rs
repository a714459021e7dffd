//! Prompt text and output schemas for the movie generation steps.

use marquee_core::{CastMember, Message, MovieState};
use serde_json::{Value, json};

const GRITTY_TONES: [&str; 5] = [
    "family-friendly and lighthearted",
    "light drama with mild themes",
    "moderate drama with some intensity",
    "dark and mature with significant intensity",
    "extremely gritty and brutal",
];

const GRITTY_VISUALS: [&str; 5] = [
    "colorful, bright, family-friendly animated-feature poster",
    "clean, professional mainstream poster with a touch of drama",
    "dramatic lighting in a typical blockbuster poster style",
    "dark, moody poster with heavy shadows and mature themes",
    "extremely dark noir poster with harsh lighting and a brutal atmosphere",
];

fn scale_index(scale: u8) -> Option<usize> {
    (1..=5).contains(&scale).then(|| usize::from(scale) - 1)
}

fn tagged(tag: &str, body: &str) -> String {
    format!("\n<{tag}>\n{body}\n</{tag}>")
}

fn starring(cast: &[CastMember]) -> String {
    cast.iter()
        .map(|member| format!("{} as {}", member.actor, member.character))
        .collect::<Vec<_>>()
        .join(", ")
}

fn brief(movie: &MovieState) -> String {
    format!(
        "The movie is titled \"{}\" and a brief description follows:\n<Description>\n{}\n</Description>",
        movie.title(),
        movie.description().as_deref().unwrap_or_default()
    )
}

fn with_cast_and_tagline(mut info: String, movie: &MovieState) -> String {
    if !movie.cast().is_empty() {
        info.push_str(&tagged("Starring", &starring(movie.cast())));
    }
    if let Some(tagline) = movie.tagline() {
        info.push_str(&tagged("Tagline", tagline));
    }
    info
}

pub(crate) fn gritty_scale(movie: &MovieState) -> Vec<Message> {
    let instructions = "You are a film analyst rating how gritty a movie is on a scale of 1 to 5.\n\
        1: family-friendly, lighthearted, no violence or dark themes.\n\
        2: light drama, mild themes, minimal violence.\n\
        3: moderate drama, some violence or darker themes.\n\
        4: dark themes, significant violence, mature content.\n\
        5: brutal violence and very dark themes.\n\
        Rate the movie from its title alone. Reply with the number only.";
    vec![
        Message::system(instructions),
        Message::user(format!("Movie Title: \"{}\"", movie.title())),
    ]
}

pub(crate) fn description(movie: &MovieState, trends: &[String]) -> Vec<Message> {
    let mut instructions = String::from(
        "You are a screenwriter pitching a new movie to a studio.\n\
         Using the details the user gives you, write the plot and a short description \
         that would make the film an easy sale.\n\
         Reply with the description only.",
    );
    if !trends.is_empty() {
        instructions.push_str("\nLean into the popular movie trends listed below.");
        instructions.push_str(&tagged("PopularMovieTrends", &trends.join("\n")));
        instructions.push_str("\nWork at least one of these trends into the description.");
    }

    let mut info = format!("<Title>\n{}\n</Title>", movie.title());
    if let Some(index) = movie.gritty_scale().and_then(scale_index) {
        let scale = index + 1;
        info.push_str(&tagged(
            "GrittyScale",
            &format!("{scale}/5 - Make this {}", GRITTY_TONES[index]),
        ));
    }
    let info = with_cast_and_tagline(info, movie);

    vec![Message::system(instructions), Message::user(info)]
}

pub(crate) fn tagline(movie: &MovieState) -> Vec<Message> {
    let instructions = "You are a marketer writing catchy movie taglines for billboards.\n\
        Use the details the user gives you.\n\
        Reply with the tagline only, without quotes.";
    let mut info = format!("<Title>\n{}\n</Title>", movie.title());
    if let Some(description) = movie.description() {
        info.push_str(&tagged("Description", description));
    }
    vec![Message::system(instructions), Message::user(info)]
}

pub(crate) fn cast(movie: &MovieState, actors: &[String]) -> Vec<Message> {
    let instructions = "You are a casting director.\n\
        Invent the characters for the movie the user describes and pick the actor \
        best suited to each role. Be creative, keep the cast diverse, and typecast \
        actors wherever you can.";
    let mut info = brief(movie);
    info.push_str("\nAdd extra characters and actors if they would help at the box office.");
    if !actors.is_empty() {
        info.push_str("\nThese actors are popular right now; choose from them where it makes sense.");
        info.push_str(&tagged("PopularActors", &actors.join("\n")));
    }
    vec![Message::system(instructions), Message::user(info)]
}

pub(crate) fn poster_prompt(movie: &MovieState) -> Vec<Message> {
    let instructions = "You write prompts for a text-to-image model.\n\
        Using the movie details the user gives you, write the prompt that will \
        produce the best possible poster for the movie.\n\
        Reply with the prompt only.";
    let mut info = brief(movie);
    if let Some(index) = movie.gritty_scale().and_then(scale_index) {
        info.push_str(&tagged(
            "VisualStyle",
            &format!(
                "Create a {} (Gritty Scale: {}/5)",
                GRITTY_VISUALS[index],
                index + 1
            ),
        ));
    }
    let info = with_cast_and_tagline(info, movie);
    vec![Message::system(instructions), Message::user(info)]
}

pub(crate) fn reviews(movie: &MovieState) -> Vec<Message> {
    let instructions = "You generate synthetic movie reviews.\n\
        Write three realistic reviews of the movie the user describes, each with \
        a different star rating that matches the sentiment of its text.\n\
        Give every reviewer a distinct name that cheekily suits their style.";
    let info = with_cast_and_tagline(brief(movie), movie);
    vec![Message::system(instructions), Message::user(info)]
}

pub(crate) fn cast_schema() -> Value {
    json!({
        "type": "array",
        "items": {
            "type": "object",
            "properties": {
                "character": {
                    "type": "string",
                    "description": "The scripted name of the character in the movie"
                },
                "actor": {
                    "type": "string",
                    "description": "The suggested actor to play this character"
                }
            },
            "required": ["character", "actor"],
            "additionalProperties": false
        }
    })
}

pub(crate) fn reviews_schema() -> Value {
    json!({
        "type": "array",
        "items": {
            "type": "object",
            "properties": {
                "author": {
                    "type": "string",
                    "description": "The full name of the reviewer"
                },
                "text": {
                    "type": "string",
                    "description": "The review text that the reviewer wrote"
                },
                "rating": {
                    "type": "number",
                    "minimum": 1,
                    "maximum": 5,
                    "description": "The number of stars given. Whole numbers only"
                }
            },
            "required": ["author", "text", "rating"],
            "additionalProperties": false
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use marquee_core::FieldUpdate;

    #[test]
    fn description_mentions_trends_only_when_present() {
        let movie = MovieState::default();
        let without = description(&movie, &[]);
        assert!(!without[0].content.contains("PopularMovieTrends"));

        let with = description(&movie, &["Heists in space".to_string()]);
        assert!(with[0].content.contains("<PopularMovieTrends>\nHeists in space"));
    }

    #[test]
    fn poster_prompt_includes_style_and_cast() {
        let mut movie = MovieState::default();
        movie.apply(FieldUpdate::GrittyScale(5));
        movie.apply(FieldUpdate::Cast(vec![CastMember {
            character: "Neil".to_string(),
            actor: "Robert De Niro".to_string(),
        }]));

        let messages = poster_prompt(&movie);
        assert!(messages[1].content.contains("noir"));
        assert!(messages[1].content.contains("Robert De Niro as Neil"));
    }

    #[test]
    fn out_of_range_scale_adds_no_tone() {
        let mut movie = MovieState::default();
        movie.apply(FieldUpdate::GrittyScale(9));
        assert!(!description(&movie, &[])[1].content.contains("GrittyScale"));
    }
}
