use crate::risk::RiskClass;
use crate::types::CourseRecommendation;

/// Static three-course list per risk tier, used when the service sends no recommendations.
pub fn fallback_courses(risk: RiskClass) -> Vec<CourseRecommendation> {
    match risk {
        RiskClass::High => vec![
            CourseRecommendation::new("Career Planning Basics")
                .with_platform("Coursera")
                .with_duration("4 weeks")
                .with_level("Beginner")
                .with_url("https://www.coursera.org/search?query=career%20planning"),
            CourseRecommendation::new("Self-Assessment and Goal Setting")
                .with_platform("Udemy")
                .with_duration("3 weeks")
                .with_level("Beginner")
                .with_url("https://www.udemy.com/courses/search/?q=goal%20setting"),
            CourseRecommendation::new("Confidence and Decision Making")
                .with_platform("edX")
                .with_duration("4 weeks")
                .with_level("Beginner")
                .with_url("https://www.edx.org/search?q=decision%20making"),
        ],
        RiskClass::Medium => vec![
            CourseRecommendation::new("Building a Career Roadmap")
                .with_platform("Coursera")
                .with_duration("4 weeks")
                .with_level("Intermediate")
                .with_url("https://www.coursera.org/search?query=career%20roadmap"),
            CourseRecommendation::new("Applied Project Portfolio")
                .with_platform("Udemy")
                .with_duration("6 weeks")
                .with_level("Intermediate")
                .with_url("https://www.udemy.com/courses/search/?q=portfolio%20projects"),
            CourseRecommendation::new("Structured Problem Solving")
                .with_platform("edX")
                .with_duration("5 weeks")
                .with_level("Intermediate")
                .with_url("https://www.edx.org/search?q=problem%20solving"),
        ],
        RiskClass::Low => vec![
            CourseRecommendation::new("Advanced Specialization Capstone")
                .with_platform("Coursera")
                .with_duration("8 weeks")
                .with_level("Advanced")
                .with_url("https://www.coursera.org/search?query=capstone"),
            CourseRecommendation::new("Leadership and Influence")
                .with_platform("edX")
                .with_duration("6 weeks")
                .with_level("Advanced")
                .with_url("https://www.edx.org/search?q=leadership"),
            CourseRecommendation::new("Industry Internship Readiness")
                .with_platform("Udemy")
                .with_duration("4 weeks")
                .with_level("Advanced")
                .with_url("https://www.udemy.com/courses/search/?q=internship"),
        ],
    }
}
