//! Hard-coded page data, stood in for a real post-fetching API.

use lurkit_client::api::{Comment, CommentId, Post, PostId, Rule};

use crate::lang::Lang;

pub fn post() -> Post {
    Post {
        id: PostId(String::from("1")),
        title: String::from(
            "Whats a small act of kindness you were once shown, that youll never forget?",
        ),
        author: String::from("username123"),
        content: String::from(
            "Im curious to hear about small acts of kindness that have stuck with you over \
             the years. Sometimes the smallest gestures can have the biggest impact.",
        ),
        timestamp: String::from("5 hours ago"),
        votes: 15200,
        subreddit: String::from("AskReddit"),
        comments: vec![Comment {
            id: CommentId(String::from("c1")),
            author: String::from("commenter1"),
            content: String::from(
                "When I was broke in college, a stranger paid for my groceries when my card \
                 got declined. It was only about $30 worth but Ill never forget that.",
            ),
            timestamp: String::from("4 hours ago"),
            votes: 523,
            replies: vec![],
        }],
    }
}

pub fn rules(lang: Lang) -> Vec<Rule> {
    vec![
        Rule {
            id: 1,
            title: String::from(lang.text("Be respectful", "Sé respetuoso")),
            description: String::from(lang.text(
                "Treat others with respect and follow Reddiquette",
                "Trata a los demás con respeto y sigue la Reddiquette",
            )),
        },
        Rule {
            id: 2,
            title: String::from(lang.text("No personal information", "Sin información personal")),
            description: String::from(lang.text(
                "Do not share personal or confidential information",
                "No compartas información personal o confidencial",
            )),
        },
    ]
}
