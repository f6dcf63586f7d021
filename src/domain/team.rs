#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
    pub image_url: &'static str,
}

static EDITORIAL_TEAM: [TeamMember; 4] = [
    TeamMember {
        name: "Sarah Jenkins",
        role: "Senior Editor, Air Freight",
        bio: "Sarah brings over 15 years of experience in aviation logistics. Formerly with Cargo Facts, she specializes in analyzing air cargo capacity trends and carrier strategies.",
        image_url: "https://images.unsplash.com/photo-1573496359142-b8d87734a5a2?auto=format&fit=crop&q=80&w=300&h=300",
    },
    TeamMember {
        name: "David Chen",
        role: "Lead Analyst, Ocean Markets",
        bio: "David is a renowned expert in trans-pacific trade lanes. His analysis of container spot rates and port congestion is widely cited in the industry.",
        image_url: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?auto=format&fit=crop&q=80&w=300&h=300",
    },
    TeamMember {
        name: "Elena Rodriguez",
        role: "Supply Chain & Tech Editor",
        bio: "Elena covers the intersection of technology and supply chain resilience. She reports on digitalization, blockchain adoption, and sustainability regulations.",
        image_url: "https://images.unsplash.com/photo-1580489944761-15a19d654956?auto=format&fit=crop&q=80&w=300&h=300",
    },
    TeamMember {
        name: "Michael Chang",
        role: "Regulatory Affairs Correspondent",
        bio: "Based in Brussels, Michael tracks evolving EU and global trade regulations, providing critical insights on compliance for logistics managers.",
        image_url: "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?auto=format&fit=crop&q=80&w=300&h=300",
    },
];

pub fn editorial_team() -> &'static [TeamMember] {
    &EDITORIAL_TEAM
}
