//! Curated learning paths per catalog technology. Module titles and
//! descriptions are translation keys resolved by the client.

use self::ResourceKind::{Article, Course, Video};
use self::ResourceSource::{Sopra, Youtube};
use crate::models::quiz::SkillLevel;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Video,
    Article,
    Course,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceSource {
    Sopra,
    Youtube,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Resource {
    #[serde(rename = "type")]
    pub kind: ResourceKind,
    pub source: ResourceSource,
    pub title: &'static str,
    pub url: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    pub title_key: &'static str,
    pub description_key: &'static str,
    pub resources: &'static [Resource],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Level {
    pub name: SkillLevel,
    pub modules: &'static [Module],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningPath {
    pub slug: &'static str,
    pub name: &'static str,
    pub description_key: &'static str,
    pub levels: &'static [Level],
}

const fn res(
    kind: ResourceKind,
    source: ResourceSource,
    title: &'static str,
    url: &'static str,
    duration: Option<&'static str>,
) -> Resource {
    Resource {
        kind,
        source,
        title,
        url,
        duration,
    }
}

pub const LEARNING_PATHS: &[LearningPath] = &[
    LearningPath {
        slug: "csharp",
        name: "C#",
        description_key: "technologies.csharp.description",
        levels: &[
            Level {
                name: SkillLevel::Beginner,
                modules: &[
                    Module {
                        title_key: "technologies.csharp.beginner.module1.title",
                        description_key: "technologies.csharp.beginner.module1.description",
                        resources: &[
                            res(Course, Sopra, "C# Development Fundamentals Journey", "https://sopra.percipio.com/journey/be885a23-3ee8-4c14-8407-ea1d3d0c6dab", None),
                            res(Video, Youtube, "C# Tutorial For Beginners - Learn C# in 1 Hour", "https://www.youtube.com/watch?v=gfkTfcpWqAY", Some("1h")),
                            res(Video, Youtube, "C# Full Course for free C#", "https://www.youtube.com/watch?v=wxznTygnRfQ", Some("6h")),
                            res(Video, Youtube, "C# Tutorial - Full Course for Beginners", "https://www.youtube.com/watch?v=GhQdlIFylQ8", Some("4h 26m")),
                            res(Video, Youtube, "Master Design Patterns & SOLID Principles in C# - Full OOP Course for Beginners", "https://www.youtube.com/watch?v=rylaiB2uH2A", Some("3h 36m")),
                            res(Video, Youtube, "7 Patrones de Diseño que todo Programador Debería Conocer", "https://www.youtube.com/watch?v=rqOaZf4xMlI", Some("20m")),
                        ],
                    },
                    Module {
                        title_key: "technologies.csharp.beginner.module2.title",
                        description_key: "technologies.csharp.beginner.module2.description",
                        resources: &[
                            res(Article, Sopra, "C# Data Types Explained", "https://www.w3schools.com/cs/cs_data_types.php", None),
                        ],
                    },
                ],
            },
            Level {
                name: SkillLevel::Intermediate,
                modules: &[Module {
                    title_key: "technologies.csharp.intermediate.module1.title",
                    description_key: "technologies.csharp.intermediate.module1.description",
                    resources: &[
                        res(Course, Sopra, "C# Intermediate Learning Track", "https://sopra.percipio.com/track/fed7500e-f1c5-42cf-9b14-2c738633361a", None),
                        res(Video, Youtube, "Building REST API using ASP.NET Core and Entity Framework Core", "https://www.youtube.com/watch?v=e1hpjbClopA", Some("2h 45m")),
                        res(Video, Youtube, "5 Design Patterns That Are ACTUALLY Used By Developers", "https://www.youtube.com/watch?v=YMAwgRwjEOQ", Some("30m")),
                        res(Video, Youtube, "C# Async/Await Explained in 20 Minutes", "https://www.youtube.com/watch?v=5a6WCBftjvw", Some("20m")),
                        res(Video, Youtube, "Entity Framework Core Crash Course", "https://www.youtube.com/watch?v=lOCUFuTyvaE", Some("1h 50m")),
                    ],
                }],
            },
            Level {
                name: SkillLevel::Advanced,
                modules: &[Module {
                    title_key: "technologies.csharp.advanced.module1.title",
                    description_key: "technologies.csharp.advanced.module1.description",
                    resources: &[
                        res(Course, Sopra, "C# Advanced Learning Track", "https://sopra.percipio.com/track/ba25d689-0c0e-4585-92b7-640ed1651c7d", None),
                        res(Video, Youtube, "Advanced C# – LINQ Tutorial", "https://www.youtube.com/watch?v=5l2qA3Pc83M", Some("27m")),
                        res(Video, Youtube, "5 Design Patterns That Are ACTUALLY Used By Developers", "https://www.youtube.com/watch?v=YMAwgRwjEOQ", Some("30m")),
                        res(Course, Youtube, ".NET Microservices – Full Course", "https://www.youtube.com/watch?v=DgVjEo3OGBI&list=PLpXfHEl2fzl7a7p4ntTmdjmNSD1iEYXrm", Some("Multiple videos")),
                        res(Video, Youtube, "Speed Up Your C# Applications - Performance Optimization Made Practical", "https://www.youtube.com/watch?v=zzNHSeW1nFs", Some("49m")),
                        res(Course, Youtube, "Advanced C# Topics", "https://www.youtube.com/watch?v=dkFYUUWdQYI&list=PLSr9CPTtmP9js0n4XOmI4vfKeVvlS32PA", Some("Multiple videos")),
                    ],
                }],
            },
        ],
    },
    LearningPath {
        slug: "angular",
        name: "Angular",
        description_key: "technologies.angular.description",
        levels: &[
            Level {
                name: SkillLevel::Beginner,
                modules: &[Module {
                    title_key: "technologies.angular.beginner.module1.title",
                    description_key: "technologies.angular.beginner.module1.description",
                    resources: &[
                        res(Course, Sopra, "Angular Beginner Journey", "https://sopra.percipio.com/channels/f3619a61-1944-11e7-b488-c198130a9b04/view/6c3e8841-d56a-45d2-a6dd-36ac704c9d8d?tab=WATCH", None),
                        res(Video, Sopra, "What's New in Angular 17 & 18", "https://sopra.percipio.com/courses/9d2b542c-d61e-4ffd-a7e0-99df49567f0e/videos/6e3bfbd3-992e-4739-aaf2-6a4b2b5a95f2", Some("35m")),
                        res(Video, Youtube, "Angular for Beginners - Full Course", "https://www.youtube.com/watch?v=3qBXWUpoPHo", Some("11h 17m")),
                        res(Video, Youtube, "Learn Angular - Full Tutorial for Beginners", "https://www.youtube.com/watch?v=f7unUpshmpA", Some("1h 12m")),
                        res(Video, Youtube, "Angular Component Communication", "https://www.youtube.com/watch?v=MtTAfjiZxtk", Some("20m")),
                    ],
                }],
            },
            Level {
                name: SkillLevel::Intermediate,
                modules: &[Module {
                    title_key: "technologies.angular.intermediate.module1.title",
                    description_key: "technologies.angular.intermediate.module1.description",
                    resources: &[
                        res(Course, Sopra, "Angular Intermediate Journey", "https://sopra.percipio.com/channels/f3619a61-1944-11e7-b488-c198130a9b04/view/a11bcb81-3461-4631-89be-586006d1d293?tab=WATCH", None),
                        res(Video, Youtube, "Angular Dependency Injection - A Deep Dive", "https://www.youtube.com/watch?v=OFPIGlxunL0", Some("25m")),
                        res(Video, Youtube, "Angular Migration from v14 to v17", "https://www.youtube.com/watch?v=fbCfniJT_JA", Some("30m")),
                        res(Video, Youtube, "Are Modules required in Angular 19?", "https://www.youtube.com/watch?v=x5PZwb4XurU", Some("15m")),
                    ],
                }],
            },
            Level {
                name: SkillLevel::Advanced,
                modules: &[Module {
                    title_key: "technologies.angular.advanced.module1.title",
                    description_key: "technologies.angular.advanced.module1.description",
                    resources: &[
                        res(Course, Sopra, "Angular Advanced Journey", "https://sopra.percipio.com/channels/f3619a61-1944-11e7-b488-c198130a9b04/view/8f0be60e-27a4-4470-95a8-4b57e1ca48e4?tab=WATCH", None),
                        res(Course, Youtube, "Mastering Angular", "https://www.youtube.com/watch?v=R_It2UgUssg&list=PLoC8Q0moRTSgYzCoo5fklvPT40KQVUorx", Some("54 videos")),
                    ],
                }],
            },
        ],
    },
    LearningPath {
        slug: "ionic",
        name: "Ionic",
        description_key: "technologies.ionic.description",
        levels: &[
            Level {
                name: SkillLevel::Beginner,
                modules: &[Module {
                    title_key: "technologies.ionic.beginner.module1.title",
                    description_key: "technologies.ionic.beginner.module1.description",
                    resources: &[
                        res(Video, Sopra, "Intro to Ionic", "https://www.youtube.com/watch?v=O2giE-Ja_1I", Some("1h 12m")),
                        res(Video, Youtube, "Ionic 7 Crash Course | Build a Complete App with Standalone Components", "https://www.youtube.com/watch?v=5Gj4Y8zvl-s", Some("1h 56m")),
                        res(Video, Youtube, "Ionic Tutorial #2 - The Basics (How Ionic Works)", "https://www.youtube.com/watch?v=Fh8MmgWWvMs", Some("11m")),
                        res(Video, Youtube, "Ionic Tutorial #4 - Navigation & Pages", "https://www.youtube.com/watch?v=8xf0X4KEIkg", Some("14m")),
                        res(Video, Youtube, "Ionic Tutorial #8 - Data, Events & Lifecycle Hooks", "https://www.youtube.com/watch?v=E-aXqVe2K1g", Some("13m")),
                    ],
                }],
            },
            Level {
                name: SkillLevel::Intermediate,
                modules: &[Module {
                    title_key: "technologies.ionic.intermediate.module1.title",
                    description_key: "technologies.ionic.intermediate.module1.description",
                    resources: &[
                        res(Video, Youtube, "Ionic Tutorial #9 - HTTP Requests", "https://www.youtube.com/watch?v=_p4lL3dhovY", Some("11m")),
                        res(Video, Youtube, "Ionic Tutorial #13 - Storing Data with Storage", "https://www.youtube.com/watch?v=WshbmpP5JuY", Some("12m")),
                    ],
                }],
            },
            Level {
                name: SkillLevel::Advanced,
                modules: &[Module {
                    title_key: "technologies.ionic.advanced.module1.title",
                    description_key: "technologies.ionic.advanced.module1.description",
                    resources: &[
                        res(Video, Youtube, "Ionic Tutorial #19 - Authentication", "https://www.youtube.com/watch?v=PZ8stXVoXjE", Some("16m")),
                        res(Video, Youtube, "Ionic Tutorial #28 - Building for Android & IOS", "https://www.youtube.com/watch?v=4y3AeFDdFVY", Some("11m")),
                    ],
                }],
            },
        ],
    },
    LearningPath {
        slug: "blazor",
        name: "Blazor",
        description_key: "technologies.blazor.description",
        levels: &[
            Level {
                name: SkillLevel::Beginner,
                modules: &[Module {
                    title_key: "technologies.blazor.beginner.module1.title",
                    description_key: "technologies.blazor.beginner.module1.description",
                    resources: &[
                        res(Article, Sopra, "Blazor: A New Era for C# Web Devs", "https://dotnet.microsoft.com/en-us/apps/aspnet/web-apps/blazor", None),
                        res(Course, Youtube, "Blazor Tutorial for Beginners", "https://www.youtube.com/watch?v=uuzi3SmCLVo&list=PL6n9fhu94yhVowClAs8-6nYnfsOTma14P", Some("131 videos")),
                        res(Video, Youtube, "Blazor in 100 Seconds", "https://www.youtube.com/watch?v=w8imy7LT9zY", Some("2m 17s")),
                    ],
                }],
            },
            Level {
                name: SkillLevel::Intermediate,
                modules: &[Module {
                    title_key: "technologies.blazor.intermediate.module1.title",
                    description_key: "technologies.blazor.intermediate.module1.description",
                    resources: &[
                        res(Video, Youtube, "Blazor Components | Ep 3 | Blazor for Beginners", "https://www.youtube.com/watch?v=G910vWOdhQ8&list=PLzewa6pjbr3IQEUfNiK2SROQC1NuKl6PV&index=3", Some("27m")),
                        res(Video, Youtube, "Blazor Forms and Validation | Ep 5 | Blazor for Beginners", "https://www.youtube.com/watch?v=3Gr83lIaENg&list=PLzewa6pjbr3IQEUfNiK2SROQC1NuKl6PV&index=5", Some("26m")),
                    ],
                }],
            },
            Level {
                name: SkillLevel::Advanced,
                modules: &[Module {
                    title_key: "technologies.blazor.advanced.module1.title",
                    description_key: "technologies.blazor.advanced.module1.description",
                    resources: &[
                        res(Video, Youtube, "Authentication in Blazor | Ep 12 | Blazor for Beginners", "https://www.youtube.com/watch?v=iq2btD9WufI&list=PLzewa6pjbr3IQEUfNiK2SROQC1NuKl6PV&index=12", Some("24m")),
                        res(Video, Youtube, "Publishing a Blazor App | Ep 16 | Blazor for Beginners", "https://www.youtube.com/watch?v=vi51RBc_TkY&list=PLzewa6pjbr3IQEUfNiK2SROQC1NuKl6PV&index=16", Some("10m")),
                        res(Video, Youtube, "How to deploy Blazor app to Azure | Blazor for Beginners", "https://www.youtube.com/watch?v=oprGTwdpDKk&list=PLzewa6pjbr3IQEUfNiK2SROQC1NuKl6PV&index=24", Some("9m")),
                        res(Video, Youtube, "Publish to IIS | Ep 28 | Blazor for Beginners", "https://www.youtube.com/watch?v=STtxYvPxPl4&list=PLzewa6pjbr3IQEUfNiK2SROQC1NuKl6PV&index=28", Some("10m")),
                    ],
                }],
            },
        ],
    },
    LearningPath {
        slug: "razor",
        name: "Razor",
        description_key: "technologies.razor.description",
        levels: &[
            Level {
                name: SkillLevel::Beginner,
                modules: &[Module {
                    title_key: "technologies.razor.beginner.module1.title",
                    description_key: "technologies.razor.beginner.module1.description",
                    resources: &[
                        res(Video, Youtube, "ASP.NET Core Razor Pages Tutorial", "https://www.youtube.com/watch?v=pmWFzzU_NB4", Some("3h 48m")),
                        res(Video, Youtube, "Razor Pages tutorial for beginners | ASP.NET Core", "https://www.youtube.com/watch?v=oKY60aLOrrs", Some("40m")),
                    ],
                }],
            },
            Level {
                name: SkillLevel::Intermediate,
                modules: &[Module {
                    title_key: "technologies.razor.intermediate.module1.title",
                    description_key: "technologies.razor.intermediate.module1.description",
                    resources: &[
                        res(Video, Youtube, "CRUD Operations in Razor Pages in ASP.NET Core", "https://www.youtube.com/watch?v=ZqlvK5UcXnY", Some("29m")),
                    ],
                }],
            },
            // No advanced material curated yet.
            Level {
                name: SkillLevel::Advanced,
                modules: &[],
            },
        ],
    },
];

pub fn find_learning_path(slug: &str) -> Option<&'static LearningPath> {
    LEARNING_PATHS.iter().find(|p| p.slug == slug)
}
