use yew::prelude::*;
use web_sys::js_sys::Math;

use crate::animation::particles::{burst_offsets, scatter, FloatingParticle};
use crate::animation::reveal::{use_reveal, RevealSpec};
use crate::animation::ring::{circumference, stat_label, stroke_dashoffset};
use crate::animation::visibility::use_visibility_gate;
use crate::config;

#[derive(Clone, PartialEq)]
pub struct Stat {
    pub number: u32,
    pub suffix: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    /// How full the ring gets, 0-100. 400% still only fills the circle once.
    pub max_progress: f64,
}

pub const STATS: [Stat; 4] = [
    Stat {
        number: 400,
        suffix: "%",
        label: "Average Social Media Growth",
        description: "Follower increase in 6 months",
        max_progress: 100.0,
    },
    Stat {
        number: 150,
        suffix: "+",
        label: "Websites Delivered",
        description: "High-performance sites launched",
        max_progress: 100.0,
    },
    Stat {
        number: 98,
        suffix: "%",
        label: "Client Satisfaction Rate",
        description: "Happy clients recommend us",
        max_progress: 98.0,
    },
    Stat {
        number: 24,
        suffix: "/7",
        label: "Dedicated Support",
        description: "Always here when you need us",
        max_progress: 100.0,
    },
];

#[function_component(StatsSection)]
pub fn stats_section() -> Html {
    let section_ref = use_node_ref();
    let in_view = use_visibility_gate(section_ref.clone(), config::VISIBILITY_THRESHOLD);
    // Drawn once per mount so the dots don't jump around on every re-render
    let particles = use_state(|| scatter(config::FLOATING_PARTICLES, Math::random));

    html! {
        <section ref={section_ref} class="stats-section">
            <div class="stats-background">
                { for particles.iter().map(|p: &FloatingParticle| html! {
                    <div class="stats-particle" style={p.style()}></div>
                }) }
            </div>

            <div class="stats-content">
                <div class={classes!("stats-header", in_view.then(|| "visible"))}>
                    <h2>{"The Results Speak for Themselves"}</h2>
                    <p>{"Real numbers from real client success stories"}</p>
                </div>

                <div class="stats-grid">
                    { for STATS.iter().enumerate().map(|(index, stat)| html! {
                        <StatCard key={stat.label} stat={stat.clone()} index={index} in_view={in_view} />
                    }) }
                </div>
            </div>

            <style>
                {r#"
                    .stats-section {
                        position: relative;
                        overflow: hidden;
                        padding: 5rem 0;
                        background: linear-gradient(135deg, #1e3a8a 0%, #7c3aed 100%);
                        color: #fff;
                    }
                    .stats-background {
                        position: absolute;
                        inset: 0;
                    }
                    @keyframes statsFloat {
                        0% { transform: translateY(0); opacity: 0.2; }
                        50% { transform: translateY(-30px); opacity: 0.8; }
                        100% { transform: translateY(0); opacity: 0.2; }
                    }
                    .stats-particle {
                        position: absolute;
                        width: 8px;
                        height: 8px;
                        border-radius: 50%;
                        background: rgba(255, 255, 255, 0.2);
                        animation-name: statsFloat;
                        animation-iteration-count: infinite;
                        animation-timing-function: ease-in-out;
                    }
                    .stats-content {
                        position: relative;
                        z-index: 10;
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 2rem;
                    }
                    .stats-header {
                        text-align: center;
                        margin-bottom: 4rem;
                        opacity: 0;
                        transform: translateY(30px);
                        transition: opacity 0.8s ease, transform 0.8s ease;
                    }
                    .stats-header.visible {
                        opacity: 1;
                        transform: translateY(0);
                    }
                    .stats-header h2 {
                        font-size: 2.5rem;
                        font-weight: 700;
                        margin-bottom: 1rem;
                    }
                    .stats-header p {
                        font-size: 1.2rem;
                        color: rgba(255, 255, 255, 0.8);
                        max-width: 48rem;
                        margin: 0 auto;
                    }
                    .stats-grid {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 2rem;
                    }
                    .stat-card {
                        text-align: center;
                        opacity: 0;
                        transform: translateY(50px) scale(0.8);
                        transition: opacity 0.6s ease, transform 0.6s ease;
                    }
                    .stat-card.visible {
                        opacity: 1;
                        transform: translateY(0) scale(1);
                    }
                    .stat-card-inner {
                        background: rgba(255, 255, 255, 0.1);
                        backdrop-filter: blur(4px);
                        border-radius: 1.5rem;
                        padding: 2rem;
                        transition: background 0.3s ease, transform 0.3s ease;
                    }
                    .stat-card-inner:hover {
                        background: rgba(255, 255, 255, 0.2);
                        transform: translateY(-5px);
                    }
                    .stat-ring {
                        position: relative;
                        width: 6rem;
                        height: 6rem;
                        margin: 0 auto 1.5rem;
                    }
                    .stat-ring svg {
                        width: 100%;
                        height: 100%;
                        transform: rotate(-90deg);
                    }
                    .stat-ring .ring-track {
                        color: rgba(255, 255, 255, 0.2);
                    }
                    .stat-ring .ring-fill {
                        color: #fff;
                        transition: stroke-dashoffset 0.1s ease-out;
                    }
                    .stat-burst {
                        position: absolute;
                        inset: 0;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    @keyframes statBurst {
                        0% { transform: translate(0, 0) scale(0); opacity: 1; }
                        50% { transform: translate(calc(var(--burst-x) / 2), calc(var(--burst-y) / 2)) scale(1.5); opacity: 1; }
                        100% { transform: translate(var(--burst-x), var(--burst-y)) scale(0); opacity: 0; }
                    }
                    .stat-burst-dot {
                        position: absolute;
                        width: 4px;
                        height: 4px;
                        border-radius: 50%;
                        background: #fff;
                        opacity: 0;
                        animation: statBurst 1s ease-out forwards;
                    }
                    .stat-number {
                        font-size: 3rem;
                        font-weight: 700;
                        margin-bottom: 0.5rem;
                        transform: scale(0.8);
                        transition: transform 0.5s ease;
                    }
                    .stat-card.visible .stat-number {
                        transform: scale(1);
                    }
                    .stat-card h3 {
                        font-size: 1.1rem;
                        font-weight: 600;
                        margin-bottom: 0.5rem;
                        line-height: 1.25;
                    }
                    .stat-card p {
                        font-size: 0.875rem;
                        color: rgba(255, 255, 255, 0.7);
                        line-height: 1.6;
                    }
                    @media (max-width: 1024px) {
                        .stats-grid {
                            grid-template-columns: repeat(2, 1fr);
                        }
                    }
                    @media (max-width: 640px) {
                        .stats-section {
                            padding: 3rem 0;
                        }
                        .stats-grid {
                            grid-template-columns: 1fr;
                            gap: 1.5rem;
                        }
                        .stats-header h2 {
                            font-size: 1.8rem;
                        }
                        .stat-ring {
                            width: 4rem;
                            height: 4rem;
                        }
                        .stat-number {
                            font-size: 2rem;
                        }
                    }
                "#}
            </style>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub stat: Stat,
    pub index: usize,
    pub in_view: bool,
}

#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    let StatCardProps { stat, index, in_view } = props;
    let frame = use_reveal(RevealSpec::new(stat.number, stat.max_progress), *in_view);

    let stagger = *index as f64 * 0.1;
    let card_style = format!("transition-delay: {:.1}s;", stagger);
    let number_style = format!("transition-delay: {:.1}s;", stagger + 0.3);
    let circumference = circumference();

    let burst = if frame.completed && frame.value == stat.number {
        let delay = 2.1 + stagger;
        html! {
            <div class="stat-burst">
                { for burst_offsets(config::BURST_PARTICLES, config::BURST_RADIUS_PX).into_iter().map(|(x, y)| html! {
                    <div
                        class="stat-burst-dot"
                        style={format!("--burst-x: {:.2}px; --burst-y: {:.2}px; animation-delay: {:.1}s;", x, y, delay)}
                    ></div>
                }) }
            </div>
        }
    } else {
        html! {}
    };

    html! {
        <div class={classes!("stat-card", in_view.then(|| "visible"))} style={card_style}>
            <div class="stat-card-inner">
                <div class="stat-ring">
                    <svg viewBox="0 0 100 100">
                        <circle class="ring-track" cx="50" cy="50" r="40"
                            stroke="currentColor" stroke-width="6" fill="transparent" />
                        <circle class="ring-fill" cx="50" cy="50" r="40"
                            stroke="currentColor" stroke-width="6" fill="transparent"
                            stroke-linecap="round"
                            stroke-dasharray={format!("{:.3}", circumference)}
                            stroke-dashoffset={format!("{:.3}", stroke_dashoffset(frame.progress))} />
                    </svg>
                    {burst}
                </div>

                <div class="stat-number" style={number_style}>
                    {stat_label(frame.value, stat.suffix)}
                </div>
                <h3>{stat.label}</h3>
                <p>{stat.description}</p>
            </div>
        </div>
    }
}
