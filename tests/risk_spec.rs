use autoassist::risk::{matched_keywords, risk_screen, HIGH_RISK_KEYWORDS};
use speculate2::speculate;

speculate! {
    describe "risk_screen" {
        it "flags every listed keyword in lower case" {
            for keyword in HIGH_RISK_KEYWORDS {
                let note = risk_screen(&format!("question about the {} on my car", keyword));
                assert!(!note.is_empty(), "{} was not flagged", keyword);
                assert!(note.contains(keyword), "note does not name {}", keyword);
            }
        }

        it "flags keywords regardless of case" {
            for keyword in HIGH_RISK_KEYWORDS {
                let note = risk_screen(&keyword.to_uppercase());
                assert!(note.contains(keyword), "{} missed in upper case", keyword);
            }
        }

        it "returns an empty string for routine questions" {
            assert_eq!(risk_screen("2012 Toyota Corolla, squeaky door hinge"), "");
            assert_eq!(risk_screen("How often should I rotate my tires?"), "");
        }

        it "returns an empty string for empty input" {
            assert_eq!(risk_screen(""), "");
            assert_eq!(risk_screen("   "), "");
        }

        it "names the brake fluid leak in the Civic scenario" {
            let note = risk_screen("2015 Honda Civic, brake fluid leak under the car");
            assert!(note.contains("brake fluid leak"));
            assert!(note.starts_with("⚠️ **Safety Escalation Triggered**"));
        }

        it "concatenates multiple hits into a single message" {
            let note = risk_screen("Hybrid battery died and now the steering feels heavy");
            assert_eq!(note.matches("Safety Escalation Triggered").count(), 1);
            assert!(note.contains("steering, hybrid battery."));
        }

        it "matches inside longer words" {
            assert!(risk_screen("The SRS light came on").contains("srs"));
            assert!(risk_screen("manual transmissions").contains("transmission"));
        }
    }

    describe "matched_keywords" {
        it "lists hits in keyword order without duplicates" {
            let hits = matched_keywords("airbag airbag, fuel leak and an AIRBAG again");
            assert_eq!(hits, vec!["airbag", "fuel leak"]);
        }

        it "reports overlapping phrases separately" {
            let hits = matched_keywords("brake fluid leak near the brake line");
            assert_eq!(hits, vec!["brake line", "brake fluid leak"]);
        }

        it "is empty when nothing matches" {
            assert!(matched_keywords("wiper blades streak").is_empty());
        }
    }
}
