//! The compiled-in application records, in presentation order.

use vapps_domain::content::{AppFeature, AppRecord, AppStats, AppStatus, Testimonial};
use vapps_domain::platforms::PlatformSet;

const fn feature(title: &'static str, description: &'static str) -> AppFeature {
    AppFeature { title, description, icon: None }
}

const fn stats(users: &'static str, rating: &'static str) -> Option<AppStats> {
    Some(AppStats { users: Some(users), rating: Some(rating), downloads: None })
}

const fn testimonial(quote: &'static str, author: &'static str, role: &'static str) -> Option<Testimonial> {
    Some(Testimonial { quote, author, role })
}

pub(crate) static APPS: [AppRecord; 5] = [
    AppRecord {
        slug: "viona",
        name: "Viona",
        tagline: "Book your perfect appointment",
        description: "A modern booking platform that connects you with the best local service providers. \
                      Find, book, and manage appointments effortlessly.",
        long_description: Some(
            "Viona transforms how you discover and book services. Whether it's a haircut, spa treatment, \
             or any personal service, Viona brings the entire experience to your fingertips.\n\n\
             Our intelligent recommendation system learns your preferences and suggests the perfect \
             providers for you. Real-time availability, instant booking confirmations, and seamless \
             payment processing make Viona your go-to companion for self-care.",
        ),
        logo: "/apps/viona/logo.png",
        icon: "/apps/viona/icon.png",
        screenshots: &[
            "/apps/viona/screenshot-1.png",
            "/apps/viona/screenshot-2.png",
            "/apps/viona/screenshot-3.png",
        ],
        features: &[
            feature("Smart Discovery", "AI-powered recommendations based on your preferences and location"),
            feature("Real-time Booking", "See live availability and book instantly with confirmation"),
            feature("Secure Payments", "Pay securely through the app with multiple payment options"),
            feature("Reviews & Ratings", "Make informed decisions with verified customer reviews"),
            feature("Reminders", "Never miss an appointment with smart notifications"),
            feature("Favorites", "Save your favorite providers for quick rebooking"),
        ],
        links: &[],
        status: AppStatus::Active,
        platforms: PlatformSet::MOBILE,
        primary_color: "#14B8A6",
        secondary_color: "#0D9488",
        gradient: "from-teal-500 to-cyan-500",
        stats: stats("10K+", "4.8"),
        testimonial: testimonial(
            "Viona made booking my appointments so much easier. I love how I can see all available \
             slots in real-time!",
            "Sarah M.",
            "Regular User",
        ),
    },
    AppRecord {
        slug: "viona-partner",
        name: "Viona Partner",
        tagline: "Grow your service business",
        description: "The complete business management solution for service providers. Manage bookings, \
                      track analytics, and grow your customer base.",
        long_description: Some(
            "Viona Partner empowers service providers with professional tools to manage and grow their \
             business. From appointment management to customer insights, everything you need is in one \
             place.\n\n\
             Track your performance with detailed analytics, manage your team's schedules, and build \
             lasting relationships with your clients through our integrated CRM features.",
        ),
        logo: "/apps/viona-partner/logo.png",
        icon: "/apps/viona-partner/icon.png",
        screenshots: &[
            "/apps/viona-partner/screenshot-1.png",
            "/apps/viona-partner/screenshot-2.png",
            "/apps/viona-partner/screenshot-3.png",
        ],
        features: &[
            feature("Calendar Management", "Intuitive scheduling system with drag-and-drop functionality"),
            feature("Business Analytics", "Comprehensive insights into revenue, bookings, and growth"),
            feature("Team Management", "Manage staff schedules and permissions effortlessly"),
            feature("Customer CRM", "Build customer profiles and track visit history"),
            feature("Push Notifications", "Instant alerts for new bookings and changes"),
            feature("Photo Gallery", "Showcase your work with a professional portfolio"),
        ],
        links: &[],
        status: AppStatus::Active,
        platforms: PlatformSet::MOBILE,
        primary_color: "#14B8A6",
        secondary_color: "#0D9488",
        gradient: "from-teal-500 to-emerald-500",
        stats: stats("2K+", "4.7"),
        testimonial: testimonial(
            "Since switching to Viona Partner, our no-shows dropped by 60% and bookings increased \
             significantly.",
            "Mike's Barbershop",
            "Business Owner",
        ),
    },
    AppRecord {
        slug: "qr-sessions",
        name: "QR Sessions",
        tagline: "Sessions made simple",
        description: "Create, share, and manage sessions with QR codes. Perfect for events, classes, \
                      meetings, and anywhere attendance matters.",
        long_description: Some(
            "QR Sessions revolutionizes how you manage attendance and sessions. Generate unique QR codes \
             for any event, share them instantly, and track participation in real-time.\n\n\
             Whether you're running a workshop, managing a classroom, or organizing an event, QR Sessions \
             provides the tools you need to streamline the check-in process and gather valuable \
             attendance data.",
        ),
        logo: "/apps/qr-sessions/logo.png",
        icon: "/apps/qr-sessions/icon.png",
        screenshots: &[
            "/apps/qr-sessions/screenshot-1.png",
            "/apps/qr-sessions/screenshot-2.png",
            "/apps/qr-sessions/screenshot-3.png",
        ],
        features: &[
            feature("Instant QR Generation", "Create unique, secure QR codes for any session in seconds"),
            feature("Real-time Tracking", "Monitor attendance as participants check in live"),
            feature("Session Management", "Organize and schedule sessions with ease"),
            feature("Export Data", "Download attendance reports in multiple formats"),
            feature("Offline Support", "Works even without internet connection"),
            feature("Multi-session Events", "Manage complex events with multiple sessions"),
        ],
        links: &[],
        status: AppStatus::Active,
        platforms: PlatformSet::ALL,
        primary_color: "#9333EA",
        secondary_color: "#7C3AED",
        gradient: "from-purple-500 to-violet-500",
        stats: stats("5K+", "4.9"),
        testimonial: testimonial(
            "QR Sessions has transformed how we track attendance at our workshops. It's incredibly \
             intuitive!",
            "Tech Academy",
            "Education Partner",
        ),
    },
    AppRecord {
        slug: "posture-pal",
        name: "PosturePal",
        tagline: "Your friendly posture companion",
        description: "AI-powered posture monitoring that helps you build healthier habits. Get real-time \
                      feedback and improve your posture naturally.",
        long_description: Some(
            "Meet PosturePal, your friendly giraffe companion on the journey to better posture! Using \
             advanced ML-powered pose detection, PosturePal monitors your posture in real-time and \
             provides gentle reminders to help you sit and stand better.\n\n\
             Our charming giraffe mascot makes improving your posture a delightful experience. Track \
             your progress, set goals, and watch as your posture improves day by day.",
        ),
        logo: "/apps/posture-pal/logo.png",
        icon: "/apps/posture-pal/icon.png",
        screenshots: &[
            "/apps/posture-pal/screenshot-1.png",
            "/apps/posture-pal/screenshot-2.png",
            "/apps/posture-pal/screenshot-3.png",
        ],
        features: &[
            feature("AI Posture Detection", "Advanced ML Kit integration for accurate pose analysis"),
            feature("Real-time Feedback", "Instant notifications when your posture needs correction"),
            feature("Progress Tracking", "Visualize your improvement over time with detailed stats"),
            feature("Friendly Mascot", "Your giraffe companion makes posture training fun"),
            feature("Haptic Feedback", "Gentle vibrations remind you to straighten up"),
            feature("Privacy First", "All processing happens on-device for complete privacy"),
        ],
        links: &[],
        status: AppStatus::Beta,
        platforms: PlatformSet::MOBILE,
        primary_color: "#F6EAD7",
        secondary_color: "#E5D4C0",
        gradient: "from-orange-400 to-amber-500",
        stats: stats("1K+", "4.6"),
        testimonial: testimonial(
            "The giraffe mascot is adorable and the posture reminders have really helped my back pain!",
            "Jamie L.",
            "Remote Worker",
        ),
    },
    AppRecord {
        slug: "ai-poster",
        name: "AI Poster",
        tagline: "Automate your social media",
        description: "AI-powered social media automation that generates content and publishes across \
                      platforms on schedule. Connect, create, and grow your presence effortlessly.",
        long_description: Some(
            "AI Poster is your intelligent social media companion that takes the hassle out of content \
             creation and publishing. Connect your Facebook, Instagram, and Pinterest accounts, and let \
             AI do the heavy lifting.\n\n\
             Our advanced AI generates engaging captions and stunning images tailored to your brand. \
             Schedule posts across multiple platforms, track performance analytics, and watch your \
             social presence grow, all from one powerful dashboard.",
        ),
        logo: "/apps/ai-poster/logo.png",
        icon: "/apps/ai-poster/icon.png",
        screenshots: &[
            "/apps/ai-poster/screenshot-1.png",
            "/apps/ai-poster/screenshot-2.png",
            "/apps/ai-poster/screenshot-3.png",
        ],
        features: &[
            feature("AI Content Generation", "Generate engaging captions and hashtags with advanced AI models"),
            feature("AI Image Creation", "Create stunning visuals with DALL-E 3 image generation"),
            feature("Multi-Platform Publishing", "Post to Facebook, Instagram, and Pinterest from one place"),
            feature("Smart Scheduling", "Schedule posts with timezone-aware automation"),
            feature("Analytics Dashboard", "Track engagement metrics and optimize your strategy"),
            feature("Secure OAuth", "Bank-grade encryption for all your connected accounts"),
        ],
        links: &[],
        status: AppStatus::Beta,
        platforms: PlatformSet::WEB,
        primary_color: "#8B5CF6",
        secondary_color: "#7C3AED",
        gradient: "from-violet-500 to-purple-600",
        stats: stats("500+", "4.7"),
        testimonial: testimonial(
            "AI Poster has transformed how I manage social media for my clients. The AI-generated content \
             is impressive!",
            "Digital Agency",
            "Marketing Partner",
        ),
    },
];
