//! Rule-based responder: the chat core.
//!
//! A fixed, ordered table of keyword rules maps a free-text utterance to one
//! canned response. Matching is case-insensitive substring containment; the
//! first rule (in declaration order) with any trigger present wins, and the
//! fallback answers everything else. Pure computation, no I/O, total over
//! every input string.

/// One ordered keyword rule: match any trigger, answer with `response`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Rule {
    pub(crate) topic: &'static str,
    pub(crate) triggers: &'static [&'static str],
    pub(crate) response: &'static str,
}

/// Outcome of classification: which rule fired (or the fallback).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RuleMatch {
    pub(crate) topic: &'static str,
    pub(crate) response: &'static str,
}

// Declaration order is evaluation order. Earlier rules shadow later ones when
// an utterance contains triggers from several of them.
pub(crate) const RULES: &[Rule] = &[
    Rule {
        topic: "greeting",
        triggers: &["hello", "hi"],
        response: "Hello! Welcome to the Weather Station chatbot. How can I assist you with our project today?",
    },
    Rule {
        topic: "objective",
        triggers: &["objective", "purpose", "what do you do"],
        response: "Our project aims to provide an easy-to-use, non-bulky weather station. Unlike traditional stations that focus on forecasting, we prioritize visualizing live weather data in real-time with just a click of a button. It's designed to be accessible in the comfort of your own home.",
    },
    Rule {
        topic: "how_it_works",
        triggers: &["how does it work", "how does this work", "how is it built"],
        response: "The weather station uses a sensors connected to a Raspberry Pi to collect live weather data. The data is displayed on a user-friendly dashboard, allowing you to see real-time updates on temperature, humidity, and other weather parameters. All of our code is open-source, so you can review, modify, or contribute.",
    },
    Rule {
        topic: "hardware",
        triggers: &["raspberry pi", "hardware", "raspberry pi 4"],
        response: "The Raspberry Pi is used as the core processor for the weather station. It collects data from the sensors, processes it, and displays the results on the web dashboard. It's a small, efficient computer that helps keep the system compact and easy to use.",
    },
    Rule {
        topic: "sensors",
        triggers: &["sensors", "how sensor works"],
        response: "For our sensors, we used a Pi Camera to collect cloud data, a DHT22 sensor to measure temperature and humidity, and a raindrop sensor to measure precipitation. Image processing, such as edge detection and Local Binary Pattern, is applied to the images to obtain cloud data, such as edge count, texture of clouds and HSV data of clouds. These sensors are connected to the Raspberry Pi, which processes the data and displays it on the dashboard.",
    },
    Rule {
        topic: "live_data",
        triggers: &["live data", "real-time data", "collecting data", "weather data"],
        response: "Our system collects live data from the sensors in real-time. Whether it's temperature, humidity, or other weather conditions, with just one click of a button, the system updates instantly on the dashboard, allowing you to view current environmental parameters.",
    },
    Rule {
        topic: "open_source",
        triggers: &["open source", "code", "software"],
        response: "Yes, all of our code is open-source. This means anyone can access, modify, or contribute to the project. This approach ensures transparency and allows for continuous improvement by the community.",
    },
    Rule {
        topic: "personalization",
        triggers: &["personalized", "customize", "personalization"],
        response: "Our system allows for personalized data visualization. You can focus on the weather conditions that are most important to you and track those in real-time, making it easy to monitor your specific needs.",
    },
    Rule {
        topic: "privacy",
        triggers: &["privacy", "secure", "data security"],
        response: "Your data is stored securely, and since our code is open-source, you can see how the system handles data storage and usage. We prioritize transparency and ensure that your user data is protected.",
    },
    Rule {
        topic: "faq",
        triggers: &["frequently asked questions", "faq", "help", "support"],
        response: "You can ask about the project objectives, the hardware we use, how live data is collected, or how to access our open-source code. If you have other questions, feel free to ask!",
    },
    Rule {
        topic: "thanks",
        triggers: &["thank", "thanks"],
        response: "You're welcome! I'm happy to help. If you have more questions, feel free to ask!",
    },
];

// Topic list kept verbatim from the dashboard copy; it intentionally does not
// map 1:1 onto rule triggers.
pub(crate) const FALLBACK_TOPIC: &str = "unknown";
pub(crate) const FALLBACK_RESPONSE: &str = "I'm not sure what you're asking. Here are some topics I can help with:\n\
\u{2022} Purpose of the weather station project\n\
\u{2022} How the system works\n\
\u{2022} Raspberry Pi details\n\
\u{2022} Live data collection\n\
\u{2022} Open-source code\n\
\u{2022} Personalized data collection\n\n\
You can try asking: \u{201c}How does the system collect live data?\u{201d} or \u{201c}What is the project objective?\u{201d}";

/// Lowercase the utterance for matching. The original text is left to the
/// caller for display.
pub(crate) fn normalize(utterance: &str) -> String {
    utterance.to_lowercase()
}

/// Classify an utterance and report which rule fired. First match wins;
/// the fallback makes this total over any input, including empty strings.
pub(crate) fn classify_match(utterance: &str) -> RuleMatch {
    let msg = normalize(utterance);
    for rule in RULES {
        if rule.triggers.iter().any(|t| msg.contains(t)) {
            return RuleMatch {
                topic: rule.topic,
                response: rule.response,
            };
        }
    }
    RuleMatch {
        topic: FALLBACK_TOPIC,
        response: FALLBACK_RESPONSE,
    }
}

/// Classify an utterance, returning only the response text.
pub(crate) fn classify(utterance: &str) -> &'static str {
    classify_match(utterance).response
}

/// The ordered rule table, for listing and introspection.
pub(crate) fn rules() -> &'static [Rule] {
    RULES
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── matching semantics ──────────────────────────────────────────

    #[test]
    fn greeting_matches_case_insensitively() {
        let expected = classify("hello");
        assert_eq!(classify("HELLO"), expected);
        assert_eq!(classify("Hello"), expected);
        assert_eq!(classify_match("Hello").topic, "greeting");
    }

    #[test]
    fn first_match_wins_over_later_rules() {
        // Contains greeting, objective and hardware triggers; greeting is
        // declared first so it wins.
        let m = classify_match("hi there, what is the purpose of this raspberry pi");
        assert_eq!(m.topic, "greeting");
    }

    #[test]
    fn any_trigger_within_a_rule_matches() {
        assert_eq!(classify_match("tell me about the sensors").topic, "sensors");
        assert_eq!(classify_match("how sensor works please").topic, "sensors");
    }

    #[test]
    fn containment_not_whole_word() {
        // No "hardware" substring anywhere.
        let m = classify_match("I need a handheld device");
        assert_ne!(m.topic, "hardware");
        // Plain containment does match.
        assert_eq!(classify_match("our hardware setup").topic, "hardware");
        // "this" contains "hi": containment is the contract, word boundaries
        // are not.
        assert_eq!(classify_match("this").topic, "greeting");
    }

    #[test]
    fn evaluation_follows_declaration_order() {
        // "open source code" satisfies only the open_source rule, but an
        // utterance mixing live_data and open_source triggers resolves to the
        // earlier rule.
        assert_eq!(
            classify_match("is the code for the live data open source").topic,
            "live_data"
        );
    }

    // ── totality and fallback ───────────────────────────────────────

    #[test]
    fn unmatched_input_gets_fallback() {
        let m = classify_match("xyzzy quux");
        assert_eq!(m.topic, FALLBACK_TOPIC);
        assert_eq!(m.response, FALLBACK_RESPONSE);
    }

    #[test]
    fn classify_is_total() {
        let very_long = "long ".repeat(10_000);
        for input in ["", "   ", "1234 !!!", very_long.as_str()] {
            assert!(!classify(input).is_empty());
        }
    }

    #[test]
    fn classify_is_deterministic() {
        for input in ["hello", "xyzzy", "", "weather data please"] {
            assert_eq!(classify(input), classify(input));
        }
    }

    #[test]
    fn every_response_is_non_empty() {
        for rule in rules() {
            assert!(!rule.topic.is_empty());
            assert!(!rule.response.is_empty());
            assert!(!rule.triggers.is_empty());
        }
        assert!(!FALLBACK_RESPONSE.is_empty());
    }

    #[test]
    fn rule_table_covers_all_eleven_topics_in_order() {
        let topics: Vec<&str> = rules().iter().map(|r| r.topic).collect();
        assert_eq!(
            topics,
            vec![
                "greeting",
                "objective",
                "how_it_works",
                "hardware",
                "sensors",
                "live_data",
                "open_source",
                "personalization",
                "privacy",
                "faq",
                "thanks",
            ]
        );
    }

    #[test]
    fn triggers_are_stored_lowercase() {
        // Normalization lowercases the utterance only, so triggers must
        // already be lowercase to ever match.
        for rule in rules() {
            for trigger in rule.triggers {
                assert_eq!(*trigger, trigger.to_lowercase());
            }
        }
    }
}
