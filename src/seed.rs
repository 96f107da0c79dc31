//! Sample users and comments loaded at startup.

use crate::models::{Comment, Image, Reply, User};

fn user(username: &str, image_url: &str) -> User {
    User {
        image: Image { png: image_url.to_string(), webp: image_url.to_string() },
        username: username.to_string(),
    }
}

pub fn amyrobson() -> User { user("amyrobson", "https://i.ibb.co/wJ81pfW/image-amyrobson.png") }
pub fn maxblagun() -> User { user("maxblagun", "https://i.ibb.co/tYLc7Jv/image-maxblagun.png") }
pub fn ramsesmiron() -> User { user("ramsesmiron", "https://i.ibb.co/Y28dxbN/image-ramsesmiron.png") }
pub fn juliusomo() -> User { user("juliusomo", "https://i.ibb.co/3hVx9Cw/image-juliusomo.png") }

/// The fixed "you" of the UI.
pub fn current_user() -> User { juliusomo() }

pub fn sample_comments() -> Vec<Comment> {
    vec![
        Comment {
            id: "1".into(),
            content: "Impressive! Though it seems the drag feature could be improved. But overall it looks incredible. You've nailed the design and the responsiveness at various breakpoints works really well.".into(),
            created_at: "1 month ago".into(),
            score: 12,
            user: amyrobson(),
            replies: Vec::new(),
        },
        Comment {
            id: "2".into(),
            content: "Woah, your project looks awesome! How long have you been coding for? I'm still new, but think I want to dive into React as well soon. Perhaps you can give me an insight on where I can learn React? Thanks!".into(),
            created_at: "2 weeks ago".into(),
            score: 5,
            user: maxblagun(),
            replies: vec![
                Reply {
                    id: "3".into(),
                    content: "If you're still new, I'd recommend focusing on the fundamentals of HTML, CSS, and JS before considering React. It's very tempting to jump ahead but lay a solid foundation first.".into(),
                    created_at: "1 week ago".into(),
                    score: 4,
                    replying_to: Some("maxblagun".into()),
                    user: ramsesmiron(),
                },
                Reply {
                    id: "4".into(),
                    content: "I couldn't agree more with this. Everything moves so fast and it always seems like everyone knows the newest library/framework. But the fundamentals are what stay constant.".into(),
                    created_at: "2 days ago".into(),
                    score: 2,
                    replying_to: Some("ramsesmiron".into()),
                    user: juliusomo(),
                },
            ],
        },
    ]
}
