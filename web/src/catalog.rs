//! Static display content for the page.
//!
//! Everything here is read-only and hard-coded. Image and reel URLs are
//! opaque external resources; nothing is fetched or validated here.

/// One gallery image with its caption line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Moment {
    pub src: &'static str,
    pub alt: &'static str,
    pub compliment: &'static str,
}

pub const MOMENTS: &[Moment] = &[
    Moment {
        src: "/s4.jpg",
        alt: "Your beautiful smile",
        compliment: "Your smile makes my heart skip a beat every time 💝",
    },
    Moment {
        src: "/s2.jpg",
        alt: "Your enchanting eyes",
        compliment: "Your eyes are like stars that light up my world ✨",
    },
    Moment {
        src: "/s3.jpg",
        alt: "Your lovely presence",
        compliment: "Just seeing you makes my day complete 🌟",
    },
    Moment {
        src: "/s1.jpg",
        alt: "Your charming moments",
        compliment: "You are the most beautiful person I have ever seen 💖",
    },
    Moment {
        src: "/s5.jpg",
        alt: "Your precious smile",
        compliment: "Your laughter is the sweetest sound I know 🎵",
    },
    Moment {
        src: "/s6.jpg",
        alt: "Your special moments",
        compliment: "Every time I see you, I fall in love all over again 💕",
    },
    Moment {
        src: "/s7.jpg",
        alt: "Your beautiful memories",
        compliment: "You are the reason I believe in love at first sight 💫",
    },
    Moment {
        src: "/s8.jpg",
        alt: "Your lovely smile",
        compliment: "Your beauty takes my breath away every time 🌸",
    },
    Moment {
        src: "/s9.jpg",
        alt: "Your precious moments",
        compliment: "You are the most beautiful dream I never want to wake up from 💝",
    },
];

/// One line of the rotating message ticker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Note {
    pub text: &'static str,
    pub emoji: &'static str,
}

pub const NOTES: &[Note] = &[
    Note {
        text: "Every time I see you, my heart skips a beat",
        emoji: "❤️",
    },
    Note {
        text: "You make my world more beautiful",
        emoji: "🌸",
    },
    Note {
        text: "You are my favorite hello and my hardest goodbye",
        emoji: "✨",
    },
    Note {
        text: "Every moment with you feels like a dream",
        emoji: "💫",
    },
];

/// One embedded reel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reel {
    pub embed_url: &'static str,
    pub caption: &'static str,
}

pub const REELS: &[Reel] = &[
    Reel {
        embed_url: "https://www.instagram.com/reel/C4XzXzXzXzX/embed",
        caption: "Your smile brightens up my world ✨",
    },
    Reel {
        embed_url: "https://www.instagram.com/reel/C4YyYyYyYyY/embed",
        caption: "Every moment with you is magical 💫",
    },
    Reel {
        embed_url: "https://www.instagram.com/reel/C4ZzZzZzZzZ/embed",
        caption: "You make my heart skip a beat 💝",
    },
];
