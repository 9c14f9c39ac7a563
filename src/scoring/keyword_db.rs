//! Static keyword classification tables and normalization utilities
//!
//! Pure data plus pure functions. All tables are immutable, initialized once
//! at first use and never mutated at runtime. Unknown terms always fall
//! through to a safe default (`Other` / `false` / the unchanged string).

use crate::scoring::types::KeywordCategory;
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

pub static PROGRAMMING_LANGUAGES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "python",
        "java",
        "javascript",
        "typescript",
        "c++",
        "c#",
        "c",
        "go",
        "rust",
        "swift",
        "kotlin",
        "scala",
        "ruby",
        "php",
        "perl",
        "r",
        "matlab",
        "sql",
        "html",
        "css",
        "shell",
        "bash",
        "powershell",
        "dart",
        "objective-c",
        "assembly",
        "fortran",
        "cobol",
        "haskell",
        "erlang",
        "elixir",
        "clojure",
        "f#",
        "vb.net",
        "delphi",
        "lua",
    ]
    .into_iter()
    .collect()
});

pub static FRAMEWORKS_LIBRARIES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "react",
        "angular",
        "vue",
        "svelte",
        "nextjs",
        "nuxtjs",
        "gatsby",
        "express",
        "fastapi",
        "flask",
        "django",
        "spring",
        "laravel",
        "rails",
        "asp.net",
        "blazor",
        "xamarin",
        "flutter",
        "react native",
        "ionic",
        "cordova",
        "electron",
        "tauri",
        "tensorflow",
        "pytorch",
        "keras",
        "scikit-learn",
        "pandas",
        "numpy",
        "matplotlib",
        "seaborn",
        "plotly",
        "bokeh",
        "opencv",
        "nltk",
        "spacy",
        "transformers",
        "bootstrap",
        "tailwind",
        "material-ui",
        "chakra-ui",
        "ant-design",
        "bulma",
        "foundation",
        "semantic-ui",
        "jquery",
        "lodash",
        "moment",
        "axios",
        "graphql",
        "apollo",
        "redux",
        "mobx",
        "vuex",
        "pinia",
        "rxjs",
        "jest",
        "mocha",
        "cypress",
        "selenium",
        "puppeteer",
        "playwright",
        "storybook",
        "webpack",
        "vite",
        "rollup",
        "parcel",
        "babel",
        "eslint",
        "prettier",
        "husky",
        "lint-staged",
        "node.js",
        "nodejs",
        "unit testing",
        "test automation",
        "ci/cd",
    ]
    .into_iter()
    .collect()
});

pub static CLOUD_PLATFORMS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "aws",
        "azure",
        "gcp",
        "google cloud",
        "digitalocean",
        "linode",
        "vultr",
        "heroku",
        "netlify",
        "vercel",
        "firebase",
        "supabase",
        "planetscale",
        "mongodb atlas",
        "redis cloud",
        "cloudflare",
        "fastly",
        "cdn",
    ]
    .into_iter()
    .collect()
});

pub static AWS_SERVICES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "ec2",
        "lambda",
        "s3",
        "rds",
        "dynamodb",
        "cloudformation",
        "cloudwatch",
        "iam",
        "vpc",
        "route53",
        "cloudfront",
        "api gateway",
        "sqs",
        "sns",
        "ses",
        "elastic beanstalk",
        "ecs",
        "eks",
        "fargate",
        "ecr",
        "codebuild",
        "codedeploy",
        "codepipeline",
        "cloudtrail",
        "config",
        "secrets manager",
        "parameter store",
    ]
    .into_iter()
    .collect()
});

pub static DATABASES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "postgresql",
        "mysql",
        "mongodb",
        "redis",
        "elasticsearch",
        "cassandra",
        "dynamodb",
        "sqlite",
        "oracle",
        "sql server",
        "mariadb",
        "couchdb",
        "neo4j",
        "influxdb",
        "prometheus",
        "grafana",
        "tableau",
        "power bi",
        "snowflake",
        "bigquery",
        "redshift",
        "databricks",
        "spark",
    ]
    .into_iter()
    .collect()
});

pub static DEVOPS_TOOLS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "docker",
        "kubernetes",
        "terraform",
        "ansible",
        "chef",
        "puppet",
        "vagrant",
        "jenkins",
        "gitlab ci",
        "github actions",
        "circleci",
        "travis ci",
        "bamboo",
        "octopus deploy",
        "azure devops",
        "teamcity",
        "concourse",
        "drone",
        "helm",
        "istio",
        "prometheus",
        "grafana",
        "elk stack",
        "logstash",
        "kibana",
        "datadog",
        "new relic",
        "splunk",
        "nagios",
        "zabbix",
        "consul",
        "vault",
        "nomad",
        "packer",
    ]
    .into_iter()
    .collect()
});

pub static VERSION_CONTROL: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "git",
        "github",
        "gitlab",
        "bitbucket",
        "svn",
        "mercurial",
        "perforce",
        "azure repos",
        "codecommit",
        "sourcetree",
        "gitkraken",
        "tortoisegit",
    ]
    .into_iter()
    .collect()
});

pub static AI_ML_TECHNOLOGIES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "machine learning",
        "deep learning",
        "neural networks",
        "nlp",
        "computer vision",
        "reinforcement learning",
        "supervised learning",
        "unsupervised learning",
        "generative ai",
        "genai",
        "llm",
        "gpt",
        "bert",
        "transformer",
        "attention",
        "lstm",
        "cnn",
        "rnn",
        "gan",
        "vae",
        "autoencoder",
        "clustering",
        "classification",
        "regression",
        "recommendation systems",
        "time series",
        "anomaly detection",
        "feature engineering",
        "model deployment",
        "mlops",
        "data science",
        "artificial intelligence",
        "prompt engineering",
        "fine-tuning",
        "rag",
        "vector databases",
        "embeddings",
        "semantic search",
        "chatbots",
        "conversational ai",
        "openai",
        "anthropic",
        "claude",
        "claude code",
        "hugging face",
        "langchain",
        "llamaindex",
    ]
    .into_iter()
    .collect()
});

pub static METHODOLOGIES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "agile",
        "scrum",
        "kanban",
        "waterfall",
        "lean",
        "devops",
        "ci/cd",
        "tdd",
        "bdd",
        "ddd",
        "microservices",
        "monolith",
        "serverless",
        "event-driven",
        "soa",
        "rest",
        "graphql",
        "grpc",
        "soap",
        "api design",
        "system design",
        "design patterns",
        "solid principles",
        "clean code",
        "refactoring",
        "code review",
        "pair programming",
        "mob programming",
        "continuous integration",
        "continuous deployment",
        "continuous delivery",
        "infrastructure as code",
        "gitops",
        "blue-green deployment",
        "canary deployment",
        "feature flags",
        "full stack",
        "frontend",
        "backend",
        "ui",
        "apis",
        "scalable",
        "linting",
        "microservice architecture",
        "root cause analysis",
        "performance",
        "code generation",
        "unit testing",
        "test automation",
    ]
    .into_iter()
    .collect()
});

pub static TECHNICAL_CONCEPTS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "algorithms",
        "data structures",
        "object-oriented programming",
        "functional programming",
        "procedural programming",
        "concurrent programming",
        "parallel programming",
        "distributed systems",
        "scalability",
        "performance optimization",
        "caching",
        "load balancing",
        "high availability",
        "fault tolerance",
        "disaster recovery",
        "backup",
        "monitoring",
        "logging",
        "debugging",
        "testing",
        "unit testing",
        "integration testing",
        "end-to-end testing",
        "performance testing",
        "security testing",
        "penetration testing",
        "vulnerability assessment",
        "code quality",
        "static analysis",
        "dynamic analysis",
        "profiling",
        "benchmarking",
        "optimization",
        "refactoring",
        "legacy code",
        "technical debt",
        "code smell",
        "clean architecture",
        "hexagonal architecture",
        "event sourcing",
        "cqrs",
        "saga pattern",
        "circuit breaker",
        "bulkhead",
        "rate limiting",
        "throttling",
        "backpressure",
        "eventual consistency",
    ]
    .into_iter()
    .collect()
});

pub static SECURITY_CONCEPTS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "cybersecurity",
        "information security",
        "network security",
        "application security",
        "cloud security",
        "data security",
        "privacy",
        "gdpr",
        "compliance",
        "audit",
        "encryption",
        "decryption",
        "hashing",
        "digital signatures",
        "certificates",
        "pki",
        "ssl",
        "tls",
        "https",
        "oauth",
        "jwt",
        "saml",
        "ldap",
        "active directory",
        "authentication",
        "authorization",
        "access control",
        "rbac",
        "abac",
        "identity management",
        "single sign-on",
        "multi-factor authentication",
        "biometrics",
        "firewall",
        "ids",
        "ips",
        "siem",
        "soc",
        "incident response",
        "forensics",
        "malware",
        "virus",
        "trojan",
        "ransomware",
        "phishing",
        "social engineering",
        "penetration testing",
        "vulnerability scanning",
        "risk assessment",
        "threat modeling",
        "security architecture",
    ]
    .into_iter()
    .collect()
});

pub static SOFT_SKILLS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "communication",
        "leadership",
        "teamwork",
        "collaboration",
        "problem-solving",
        "critical thinking",
        "analytical thinking",
        "creativity",
        "innovation",
        "adaptability",
        "flexibility",
        "time management",
        "project management",
        "organization",
        "attention to detail",
        "multitasking",
        "decision making",
        "conflict resolution",
        "negotiation",
        "presentation",
        "public speaking",
        "mentoring",
        "coaching",
        "training",
        "documentation",
        "technical writing",
        "customer service",
        "client relations",
        "stakeholder management",
        "cross-functional collaboration",
        "remote work",
        "self-motivated",
        "proactive",
        "initiative",
        "ownership",
        "accountability",
        "reliability",
        "punctuality",
        "professional",
        "ethical",
        "integrity",
        "empathy",
        "emotional intelligence",
        "cultural awareness",
        "diversity",
        "inclusion",
    ]
    .into_iter()
    .collect()
});

pub static EDUCATION_CERTIFICATIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "bachelor",
        "master",
        "phd",
        "associate",
        "diploma",
        "certificate",
        "computer science",
        "software engineering",
        "information technology",
        "computer engineering",
        "electrical engineering",
        "data science",
        "information systems",
        "cybersecurity",
        "network security",
        "aws certified",
        "azure certified",
        "google cloud certified",
        "cisco certified",
        "comptia",
        "cissp",
        "cism",
        "cisa",
        "pmp",
        "scrum master",
        "product owner",
        "itil",
        "togaf",
        "cobit",
        "certified kubernetes administrator",
        "ckad",
        "terraform certified",
        "docker certified",
        "jenkins certified",
        "mongodb certified",
        "oracle certified",
        "microsoft certified",
        "salesforce certified",
        "bachelor's degree",
        "master's degree",
        "gpa",
        "postgraduate",
        "software engineering degree",
        "electrical engineering degree",
        "data science degree",
    ]
    .into_iter()
    .collect()
});

pub static JOB_FUNCTIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "software developer",
        "software engineer",
        "full stack developer",
        "frontend developer",
        "backend developer",
        "mobile developer",
        "web developer",
        "game developer",
        "devops engineer",
        "site reliability engineer",
        "platform engineer",
        "cloud engineer",
        "infrastructure engineer",
        "network engineer",
        "security engineer",
        "data engineer",
        "data scientist",
        "data analyst",
        "machine learning engineer",
        "ai engineer",
        "research scientist",
        "product manager",
        "project manager",
        "program manager",
        "tech lead",
        "team lead",
        "engineering manager",
        "architect",
        "principal engineer",
        "staff engineer",
        "consultant",
        "analyst",
        "specialist",
        "administrator",
        "support engineer",
        "qa engineer",
        "test engineer",
        "automation engineer",
        "build engineer",
        "release engineer",
        "solutions architect",
        "enterprise architect",
        "systems architect",
        "database administrator",
        "system administrator",
        "network administrator",
        "security analyst",
        "cybersecurity specialist",
        "penetration tester",
        "ethical hacker",
    ]
    .into_iter()
    .collect()
});

/// Generic, business and benefits words that should never count as ATS
/// keywords even when the upstream keyword extractor produces them.
pub static NOISE_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "ability",
        "access",
        "accordance",
        "action",
        "america",
        "applicable",
        "application",
        "applying",
        "at least",
        "attendance",
        "basic",
        "benefits",
        "best",
        "building",
        "certain",
        "change",
        "class",
        "company",
        "compensation",
        "compliance",
        "connection",
        "consideration",
        "daily",
        "deltek",
        "employees",
        "employment",
        "end",
        "enthusiasm",
        "equity",
        "every",
        "experience",
        "expertise",
        "factors",
        "first",
        "forbes",
        "glassdoor",
        "government",
        "haves",
        "healthcare",
        "holidays",
        "immense",
        "incentive",
        "individual",
        "information",
        "interest",
        "job-related",
        "knowledge",
        "known",
        "location",
        "measurable",
        "millions",
        "mindset",
        "modern",
        "one",
        "opportunities",
        "organizations",
        "our",
        "perks",
        "personal",
        "practices",
        "prior",
        "production",
        "productivity",
        "professional",
        "proficiency",
        "project",
        "promotion",
        "projects",
        "qualifications",
        "recent",
        "required",
        "responsible",
        "skills",
        "solutions",
        "strong",
        "students",
        "technical",
        "the",
        "their",
        "this",
        "time",
        "training",
        "travel",
        "u.s.",
        "users",
        "vacation",
        "washington",
        "world",
        "your",
        "plan",
        "insurance",
        "tuition",
        "reimbursement",
        "disability",
        "coverage",
        "life",
        "privacy",
        "notice",
        "data",
        "controller",
        "process",
        "statements",
        "candidate",
        "protection",
        "sold",
        "sell",
        "provide",
        "job",
        "range",
        "subject",
        "takes",
        "number",
        "determining",
        "base",
        "pay",
        "such",
        "as",
        "related",
        "eligible",
        "additional",
        "rewards",
        "including",
        "depending",
        "nature",
        "with",
        "have",
        "paid",
        "well-living",
        "programs",
        "short-term",
        "long-term",
        "requirements",
        "no",
    ]
    .into_iter()
    .collect()
});

/// Union of every technical sub-table. Technical membership takes precedence
/// over all other categories for overlapping terms.
pub static ALL_TECHNICAL_TERMS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    PROGRAMMING_LANGUAGES
        .iter()
        .chain(FRAMEWORKS_LIBRARIES.iter())
        .chain(CLOUD_PLATFORMS.iter())
        .chain(AWS_SERVICES.iter())
        .chain(DATABASES.iter())
        .chain(DEVOPS_TOOLS.iter())
        .chain(VERSION_CONTROL.iter())
        .chain(AI_ML_TECHNOLOGIES.iter())
        .chain(METHODOLOGIES.iter())
        .chain(TECHNICAL_CONCEPTS.iter())
        .chain(SECURITY_CONCEPTS.iter())
        .copied()
        .collect()
});

/// Known lexical variants per canonical keyword (synonyms, abbreviations).
static KEYWORD_VARIATIONS: LazyLock<HashMap<&'static str, &'static [&'static str]>> =
    LazyLock::new(|| {
        let table: &[(&str, &[&str])] = &[
            ("javascript", &["js", "node.js", "nodejs"]),
            ("typescript", &["ts"]),
            ("python", &["py"]),
            ("react", &["reactjs", "react.js"]),
            ("angular", &["angularjs", "angular.js"]),
            ("vue", &["vuejs", "vue.js"]),
            ("aws", &["amazon web services"]),
            ("gcp", &["google cloud platform"]),
            ("azure", &["microsoft azure"]),
            ("postgresql", &["postgres"]),
            ("mongodb", &["mongo"]),
            ("mysql", &["my sql"]),
            ("docker", &["containerization"]),
            ("kubernetes", &["k8s"]),
            ("jenkins", &["ci/cd"]),
            ("git", &["version control"]),
            ("agile", &["scrum"]),
            ("machine learning", &["ml", "artificial intelligence", "ai"]),
            ("artificial intelligence", &["ai", "machine learning", "ml"]),
            ("devops", &["dev ops"]),
            ("rest api", &["restful", "api"]),
            ("graphql", &["graph ql"]),
            ("sql", &["database"]),
            ("nosql", &["no sql"]),
            ("ci/cd", &["continuous integration", "continuous deployment"]),
            ("full stack", &["fullstack", "full-stack"]),
            ("frontend", &["front-end", "front end"]),
            ("backend", &["back-end", "back end"]),
            ("node.js", &["nodejs", "node js"]),
            ("next.js", &["nextjs", "next js"]),
            ("c++", &["cpp", "c plus plus"]),
            ("c#", &["csharp", "c sharp"]),
        ];
        table.iter().copied().collect()
    });

/// Canonicalization table. Lossy by design: conflating near-synonyms reduces
/// variant sprawl at the cost of precision.
static KEYWORD_NORMALIZATIONS: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| {
        let table: &[(&str, &str)] = &[
            ("js", "javascript"),
            ("ts", "typescript"),
            ("nodejs", "node.js"),
            ("node js", "node.js"),
            ("reactjs", "react"),
            ("react js", "react"),
            ("amazon web services", "aws"),
            ("ci cd", "ci/cd"),
            ("cicd", "ci/cd"),
            ("ml", "machine learning"),
            ("ai", "artificial intelligence"),
            ("fullstack", "full stack"),
            ("full-stack", "full stack"),
            ("front-end", "frontend"),
            ("front end", "frontend"),
            ("back-end", "backend"),
            ("back end", "backend"),
            ("nextjs", "next.js"),
            ("next js", "next.js"),
            ("cpp", "c++"),
            ("c plus plus", "c++"),
            ("csharp", "c#"),
            ("c sharp", "c#"),
        ];
        table.iter().copied().collect()
    });

/// Conceptually related terms used by the semantic match path.
static SEMANTIC_TERMS: LazyLock<HashMap<&'static str, &'static [&'static str]>> =
    LazyLock::new(|| {
        let table: &[(&str, &[&str])] = &[
            ("javascript", &["js", "ecmascript", "frontend", "web development"]),
            ("python", &["django", "flask", "data science", "machine learning"]),
            ("react", &["jsx", "frontend", "spa", "component"]),
            ("aws", &["cloud", "ec2", "lambda", "s3", "amazon"]),
            ("docker", &["container", "containerization", "devops"]),
            ("kubernetes", &["k8s", "orchestration", "devops", "container"]),
            ("agile", &["scrum", "sprint", "kanban", "methodology"]),
            ("machine learning", &["ml", "ai", "data science", "neural networks"]),
            ("database", &["sql", "nosql", "data storage", "persistence"]),
            ("api", &["rest", "graphql", "endpoint", "web service"]),
            ("testing", &["qa", "unit test", "integration test", "automation"]),
        ];
        table.iter().copied().collect()
    });

pub fn is_technical_term(term: &str) -> bool {
    ALL_TECHNICAL_TERMS.contains(term.to_lowercase().as_str())
}

pub fn is_soft_skill(term: &str) -> bool {
    SOFT_SKILLS.contains(term.to_lowercase().as_str())
}

pub fn is_qualification(term: &str) -> bool {
    EDUCATION_CERTIFICATIONS.contains(term.to_lowercase().as_str())
}

pub fn is_job_function(term: &str) -> bool {
    JOB_FUNCTIONS.contains(term.to_lowercase().as_str())
}

pub fn is_noise_word(term: &str) -> bool {
    NOISE_WORDS.contains(term.to_lowercase().as_str())
}

/// Classify a term by ordered set membership. First matching set wins, so
/// technical takes precedence over every other category.
pub fn keyword_category(term: &str) -> KeywordCategory {
    let term_lower = term.to_lowercase();
    let term_lower = term_lower.as_str();

    if ALL_TECHNICAL_TERMS.contains(term_lower) {
        KeywordCategory::Technical
    } else if SOFT_SKILLS.contains(term_lower) {
        KeywordCategory::SoftSkill
    } else if EDUCATION_CERTIFICATIONS.contains(term_lower) {
        KeywordCategory::Qualification
    } else if JOB_FUNCTIONS.contains(term_lower) {
        KeywordCategory::JobFunction
    } else {
        KeywordCategory::Other
    }
}

/// Lowercase, trim and rewrite known synonym spellings to a canonical form.
pub fn normalize_keyword(keyword: &str) -> String {
    let normalized = keyword.trim().to_lowercase();
    match KEYWORD_NORMALIZATIONS.get(normalized.as_str()) {
        Some(canonical) => (*canonical).to_string(),
        None => normalized,
    }
}

/// The keyword itself, any declared synonyms, and a naive singular/plural
/// toggle. No stemming beyond that. Order-preserving and deduplicated.
pub fn keyword_variations(keyword: &str) -> Vec<String> {
    let mut variations = vec![keyword.to_string()];
    let keyword_lower = keyword.to_lowercase();

    if let Some(known) = KEYWORD_VARIATIONS.get(keyword_lower.as_str()) {
        variations.extend(known.iter().map(|v| (*v).to_string()));
    }

    if keyword.ends_with('s') && keyword.len() > 3 {
        variations.push(keyword[..keyword.len() - 1].to_string());
    } else {
        variations.push(format!("{}s", keyword));
    }

    let mut seen = HashSet::new();
    variations.retain(|v| seen.insert(v.clone()));
    variations
}

/// Related terms for a keyword, if the semantic table knows it.
pub fn semantic_terms(keyword: &str) -> Option<&'static [&'static str]> {
    SEMANTIC_TERMS.get(keyword.to_lowercase().as_str()).copied()
}
