use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeroSectionProps {
    pub on_contact_click: Callback<MouseEvent>,
    pub on_work_click: Callback<MouseEvent>,
}

const HERO_BADGES: [(&str, &str); 3] = [
    ("▶️", "250M+ Views Generated"),
    ("👁️", "4+ Years of Building Personal Brands"),
    ("📅", "5000+ Videos Created"),
];

#[function_component(HeroSection)]
pub fn hero_section(props: &HeroSectionProps) -> Html {
    let HeroSectionProps { on_contact_click, on_work_click } = props;

    html! {
        <section class="studio-hero">
            <div class="studio-hero-content">
                <h1 class="studio-hero-title hero-fade-up">
                    {"We help "}
                    <span class="muted">{"entrepreneurs"}</span>
                    {" build profitable personal brands through "}
                    <span class="muted underlined">{"short-form content"}</span>
                </h1>

                <p class="studio-hero-subtitle hero-fade-up" style="animation-delay: 0.4s;">
                    {"Leverage your expertise into high-converting video content that builds trust, generates qualified leads organically, and establishes you as the go-to authority in your space."}
                </p>

                <div class="studio-hero-cta hero-fade-up" style="animation-delay: 0.6s;">
                    <button class="studio-cta-button" onclick={on_contact_click.clone()}>
                        {"Book a Free Discovery Call"}
                    </button>
                    <button class="studio-work-link" onclick={on_work_click.clone()}>
                        {"See our work"}
                    </button>
                    <div class="studio-hero-arrow">
                        <svg viewBox="0 0 128 64" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round">
                            <path d="M20 40 Q60 20 100 35 L95 30 M100 35 L95 40" />
                        </svg>
                        <span class="handwritten">{"Your personal brand starts here"}</span>
                    </div>
                </div>

                <div class="studio-hero-badges hero-fade-up" style="animation-delay: 0.8s;">
                    { for HERO_BADGES.iter().map(|(icon, text)| html! {
                        <div class="studio-badge">
                            <span class="studio-badge-icon">{*icon}</span>
                            <span>{*text}</span>
                        </div>
                    }) }
                </div>
            </div>

            <style>
                {r#"
                    .studio-hero {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: #fafafa;
                        color: #111;
                    }
                    .studio-hero-content {
                        position: relative;
                        z-index: 10;
                        max-width: 72rem;
                        margin: 0 auto;
                        padding: 5rem 2rem;
                        text-align: center;
                    }
                    @keyframes heroFadeUp {
                        from { opacity: 0; transform: translateY(30px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    .hero-fade-up {
                        opacity: 0;
                        animation: heroFadeUp 0.8s ease-out forwards;
                        animation-delay: 0.2s;
                    }
                    .studio-hero-title {
                        font-size: 4.5rem;
                        font-weight: 700;
                        line-height: 1.15;
                        margin-bottom: 2rem;
                    }
                    .studio-hero-title .muted {
                        color: #6b7280;
                    }
                    .studio-hero-title .underlined {
                        text-decoration: underline;
                        text-decoration-thickness: 2px;
                        text-underline-offset: 8px;
                    }
                    .studio-hero-subtitle {
                        font-size: 1.25rem;
                        color: #6b7280;
                        max-width: 56rem;
                        margin: 0 auto 3rem;
                        line-height: 1.6;
                    }
                    .studio-hero-cta {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        margin-bottom: 4rem;
                    }
                    .studio-cta-button {
                        background: #fb923c;
                        color: #fff;
                        font-weight: 600;
                        font-size: 1.1rem;
                        padding: 1rem 3rem;
                        border: none;
                        border-radius: 0.5rem;
                        cursor: pointer;
                        margin-bottom: 1rem;
                        transition: background 0.2s ease, transform 0.2s ease;
                    }
                    .studio-cta-button:hover {
                        background: #f97316;
                        transform: scale(1.05);
                    }
                    .studio-cta-button:active {
                        transform: scale(0.95);
                    }
                    .studio-work-link {
                        background: none;
                        border: none;
                        color: #374151;
                        font-size: 1rem;
                        cursor: pointer;
                        text-decoration: underline;
                        margin-bottom: 1rem;
                    }
                    .studio-hero-arrow {
                        position: relative;
                        color: rgba(17, 17, 17, 0.6);
                    }
                    .studio-hero-arrow svg {
                        width: 8rem;
                        height: 4rem;
                    }
                    .studio-hero-arrow .handwritten {
                        position: absolute;
                        top: -0.5rem;
                        right: 0;
                        font-size: 0.875rem;
                        font-family: "Caveat", "Comic Sans MS", cursive;
                        transform: rotate(12deg);
                        white-space: nowrap;
                    }
                    .studio-hero-badges {
                        display: flex;
                        gap: 1rem;
                        justify-content: center;
                        align-items: center;
                    }
                    .studio-badge {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        background: rgba(243, 244, 246, 0.5);
                        border: 1px solid #e5e7eb;
                        border-radius: 9999px;
                        padding: 0.75rem 1.5rem;
                        font-size: 0.875rem;
                        font-weight: 500;
                    }
                    @media (max-width: 768px) {
                        .studio-hero-title {
                            font-size: 3rem;
                        }
                        .studio-hero-subtitle {
                            font-size: 1.1rem;
                        }
                        .studio-hero-badges {
                            flex-direction: column;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
