use crate::domain::model::{find_by_id, Skill, SkillCategory};

pub static SKILL_CATEGORIES: [SkillCategory; 4] = [
    SkillCategory {
        id: "data-ai",
        name: "Data Analysis & AI",
        icon: "🤖",
        skills: &[
            Skill::icon("Python", "devicon-python-plain colored"),
            Skill::icon("NumPy", "devicon-numpy-original colored"),
            Skill::badge("Intent Classification"),
            Skill::badge("TF-IDF"),
            Skill::badge("Word2Vec"),
            Skill::badge("Cosine Similarity"),
            Skill::badge("NLP"),
            Skill::badge("Entity Extraction"),
            Skill::badge("NL2SQL"),
            Skill::badge("Scikit-learn"),
            Skill::badge("Gensim"),
        ],
    },
    SkillCategory {
        id: "programming",
        name: "Programming Languages",
        icon: "💻",
        skills: &[
            Skill::icon("Python", "devicon-python-plain colored"),
            Skill::icon("TypeScript", "devicon-typescript-plain colored"),
            Skill::icon("JavaScript", "devicon-javascript-plain colored"),
            Skill::icon("SQL", "devicon-mysql-plain colored"),
            Skill::icon("Java", "devicon-java-plain colored"),
            Skill::icon("Kotlin", "devicon-kotlin-plain colored"),
            Skill::icon("PHP", "devicon-php-plain colored"),
            Skill::icon("C/C++", "devicon-c-plain colored"),
            Skill::icon("HTML/CSS", "devicon-html5-plain colored"),
        ],
    },
    SkillCategory {
        id: "web-dev",
        name: "Web Development",
        icon: "🌐",
        skills: &[
            Skill::icon("React 19", "devicon-react-original colored"),
            Skill::icon("Tailwind CSS", "devicon-tailwindcss-plain colored"),
            Skill::icon("FastAPI", "devicon-fastapi-plain colored"),
            Skill::icon("SQLAlchemy", "devicon-sqlalchemy-plain colored"),
            Skill::icon("Vite", "devicon-vitejs-plain colored"),
            Skill::badge("Ant Design 5"),
            Skill::badge("Chart.js"),
            Skill::badge("Uvicorn"),
            Skill::badge("JWT"),
            Skill::badge("Bcrypt"),
        ],
    },
    SkillCategory {
        id: "other",
        name: "Other Skills",
        icon: "🛠️",
        skills: &[Skill::icon("Git", "devicon-git-plain colored")],
    },
];

pub fn skill_category_by_id(id: &str) -> Option<&'static SkillCategory> {
    find_by_id(&SKILL_CATEGORIES, id)
}

pub fn all_skill_categories() -> &'static [SkillCategory] {
    &SKILL_CATEGORIES
}
