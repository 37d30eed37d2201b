//! Sample posts written into an empty post slot.

use super::post::Post;

const DAY_MS: i64 = 86_400_000;

struct SeedPost {
    id: &'static str,
    title: &'static str,
    content: &'static str,
    summary: &'static str,
    cover_image: &'static str,
    age_days: i64,
    author: &'static str,
    tags: &'static [&'static str],
}

const SEED: &[SeedPost] = &[
    SeedPost {
        id: "welcome-to-nebula",
        title: "Welcome to Nebula Blog",
        content: "# Hello World\n\nWelcome to **Nebula**, a next-generation blogging platform.\n\n## Features\n\n- ✨ **AI Powered**: Uses Gemini to help you write.\n- 🌑 **Dark Mode**: Easy on the eyes.\n- 📝 **Markdown**: Write cleanly and efficiently.\n\n```javascript\nconsole.log(\"Hello from the future!\");\n```\n\nStart by logging into the admin panel to create your own posts!",
        summary: "A brief introduction to the Nebula blogging platform features.",
        cover_image: "https://picsum.photos/id/1/800/400",
        age_days: 0,
        author: "System",
        tags: &["Update", "Welcome"],
    },
    SeedPost {
        id: "nebula-chinese-intro",
        title: "探索未来：Nebula 博客引擎",
        content: "# 你好，世界 👋\n\n欢迎使用 **Nebula**，这是一个专为未来设计的博客平台。\n\n## 核心特性\n\n- 🚀 **极速体验**：基于最新的 Web 技术构建。\n- 🎨 **优雅设计**：深色模式，玻璃拟态风格。\n- 🤖 **AI 辅助**：内置 Gemini 模型，辅助写作与润色。\n\n> \"未来已来，只是分布不均。\"\n\n### 代码演示\n\n```python\ndef hello_nebula():\n    print(\"你好，Nebula！\")\n```\n\n我们希望你能在这里记录下你的每一个灵感瞬间。",
        summary: "介绍 Nebula 博客系统的中文支持与核心功能演示。",
        cover_image: "https://picsum.photos/id/20/800/400",
        age_days: 1,
        author: "管理员",
        tags: &["公告", "中文"],
    },
    SeedPost {
        id: "ai-revolution-2025",
        title: "The AI Revolution of 2025",
        content: "# The Age of Intelligence\n\nArtificial Intelligence has moved beyond simple chatbots. It's now an integral part of our creative process.\n\n## Key Advancements\n\n1. **Multimodal Models**: Understanding text, image, and audio simultaneously.\n2. **Contextual Awareness**: AI that remembers your project history.\n3. **Ethical AI**: Built-in safeguards for safe deployment.\n\nIt's an exciting time to be a developer!",
        summary: "Discussing the rapid advancements in AI technology and what it means for creators.",
        cover_image: "https://picsum.photos/id/45/800/400",
        age_days: 2,
        author: "Sarah Connor",
        tags: &["AI", "Tech", "Future"],
    },
    SeedPost {
        id: "react-hooks-guide",
        title: "Mastering React Hooks",
        content: "# Why Hooks Changed Everything\n\nBefore hooks, we were drowning in class components and lifecycle methods. Now?\n\n```tsx\nconst [count, setCount] = useState(0);\n```\n\nSimple, elegant, and composable. In this guide, we'll explore `useEffect`, `useMemo`, and custom hooks.",
        summary: "A deep dive into modern React development patterns.",
        cover_image: "https://picsum.photos/id/60/800/400",
        age_days: 5,
        author: "Dan A.",
        tags: &["React", "Code", "Tutorial"],
    },
    SeedPost {
        id: "minimalist-design",
        title: "The Power of Minimalism",
        content: "# Less is More\n\nIn a world of noise, clarity is power. Minimalist design isn't about removing features; it's about emphasizing the important ones.\n\n## Principles\n\n- Negative Space\n- Typography\n- Limited Color Palette\n\nCheck out the design of **Nebula** itself as an example!",
        summary: "Why minimalist design principles lead to better user experiences.",
        cover_image: "https://picsum.photos/id/100/800/400",
        age_days: 10,
        author: "Jony I.",
        tags: &["Design", "UX", "Art"],
    },
    SeedPost {
        id: "coffee-culture",
        title: "Coffee: Fuel for Code",
        content: "# The Developer's Companion\n\nIs it possible to write code without coffee? Technically yes, but why risk it?\n\nWe explore different brewing methods:\n- V60\n- AeroPress\n- Espresso\n\nWhich one fits your coding style?",
        summary: "Exploring the intricate relationship between programming and caffeine.",
        cover_image: "https://picsum.photos/id/106/800/400",
        age_days: 15,
        author: "Barista Joe",
        tags: &["Lifestyle", "Coffee"],
    },
    SeedPost {
        id: "space-travel",
        title: "Mars: The Next Frontier",
        content: "# Red Planet Dreams\n\nWith Starship development accelerating, the dream of multi-planetary life is closer than ever.\n\n![Mars](https://picsum.photos/id/212/800/400)\n\nWhat will the first colony look like?",
        summary: "Speculating on the future of human space exploration.",
        cover_image: "https://picsum.photos/id/212/800/400",
        age_days: 400,
        author: "Elon",
        tags: &["Space", "Science"],
    },
    SeedPost {
        id: "cyberpunk-aesthetics",
        title: "Cyberpunk Aesthetics in Web Design",
        content: "# High Tech, Low Life\n\nNeon lights, dark backgrounds, and glitch effects. Cyberpunk isn't just a genre; it's a vibe.\n\n## How to achieve it\n\nUse `box-shadow` for glow effects and bold, contrasting colors like #00f0ff and #ff0099.",
        summary: "How to implement cyberpunk visual styles in CSS.",
        cover_image: "https://picsum.photos/id/200/800/400",
        age_days: 405,
        author: "Neo",
        tags: &["Design", "CSS", "Cyberpunk"],
    },
];

/// The seed set, dated relative to `now` (epoch millis), newest first.
pub fn seed_posts(now: i64) -> Vec<Post> {
    SEED.iter()
        .map(|s| Post {
            id: s.id.to_string(),
            title: s.title.to_string(),
            content: s.content.to_string(),
            summary: s.summary.to_string(),
            cover_image: s.cover_image.to_string(),
            created_at: now - s.age_days * DAY_MS,
            updated_at: now,
            author: s.author.to_string(),
            tags: s.tags.iter().map(|t| t.to_string()).collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_is_newest_first_with_unique_ids() {
        let posts = seed_posts(1_000 * DAY_MS);

        assert_eq!(posts.len(), 8);
        assert!(posts.windows(2).all(|w| w[0].created_at >= w[1].created_at));

        let ids: HashSet<_> = posts.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), posts.len());
        assert!(posts.iter().all(|p| p.validate().is_ok()));
    }
}
