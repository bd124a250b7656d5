use yew::prelude::*;

use crate::components::cards::{MissionCard, NewsCard};
use crate::components::counters::{StatCounters, StatItem};
use crate::components::hero::Hero;
use crate::components::reveal::use_reveal_animations;
use crate::components::statistics::StatisticsSection;

const MISSIONS: [(&str, &str, &str); 3] = [
    (
        "fas fa-school",
        "Accès à l'éducation",
        "Garantir une scolarisation de qualité pour chaque enfant de la région.",
    ),
    (
        "fas fa-chalkboard-teacher",
        "Formation des enseignants",
        "Accompagner les enseignants par la formation continue et l'encadrement pédagogique.",
    ),
    (
        "fas fa-chart-line",
        "Suivi des performances",
        "Mesurer les résultats scolaires pour orienter les actions prioritaires.",
    ),
];

const NEWS: [(&str, &str, &str, &str); 3] = [
    (
        "15 mars 2024",
        "Rentrée scolaire 2024",
        "Le calendrier et les modalités d'inscription pour la nouvelle année scolaire sont disponibles.",
        "zoom-in",
    ),
    (
        "2 février 2024",
        "Résultats des examens officiels",
        "Le taux de réussite progresse dans l'ensemble des circonscriptions de la région.",
        "zoom-out",
    ),
    (
        "20 janvier 2024",
        "Distribution de kits scolaires",
        "Plus de deux mille kits ont été remis aux élèves des zones rurales.",
        "fade-up",
    ),
];

fn stat_items() -> Vec<StatItem> {
    vec![
        StatItem { icon: "fas fa-school", target: 1250, label: "Établissements" },
        StatItem { icon: "fas fa-chalkboard-teacher", target: 3400, label: "Enseignants" },
        StatItem { icon: "fas fa-user-graduate", target: 85000, label: "Élèves" },
        StatItem { icon: "fas fa-map-marker-alt", target: 4, label: "Circonscriptions" },
    ]
}

#[function_component]
pub fn Home() -> Html {
    use_reveal_animations();

    html! {
        <div class="home">
            <Hero
                title="Direction Régionale de l'Éducation Nationale"
                subtitle="Au service de la réussite de chaque élève de la région Betsiboka"
            >
                <a href="#statistiques" class="btn btn-primary btn-lg">{"Voir les statistiques"}</a>
            </Hero>

            <section id="missions" class="section">
                <div class="container">
                    <h2 class="section-title" data-aos="fade-up">{"Nos missions"}</h2>
                    <div class="row">
                        {
                            MISSIONS.iter().enumerate().map(|(index, (icon, title, text))| html! {
                                <MissionCard icon={*icon} title={*title} text={*text} index={index} />
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </section>

            <section id="chiffres" class="section section-alt">
                <div class="container">
                    <StatCounters items={stat_items()} />
                </div>
            </section>

            <StatisticsSection />

            <section id="actualites" class="section section-alt">
                <div class="container">
                    <h2 class="section-title" data-aos="fade-up">{"Actualités"}</h2>
                    <div class="row">
                        {
                            NEWS.iter().map(|(date, title, excerpt, animation)| html! {
                                <NewsCard date={*date} title={*title} excerpt={*excerpt} href="#actualites" animation={*animation} />
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </section>

            <section id="contact" class="section">
                <div class="container">
                    <h2 class="section-title" data-aos="fade-up">{"Contact"}</h2>
                    <div class="row">
                        <div class="col-md-4" data-aos="fade-up">
                            <i class="fas fa-map-marker-alt"></i>
                            <p>{"Maevatanana, Région Betsiboka"}</p>
                        </div>
                        <div class="col-md-4" data-aos="fade-up" data-aos-delay="100">
                            <i class="fas fa-phone"></i>
                            <p>{"+261 20 62 000 00"}</p>
                        </div>
                        <div class="col-md-4" data-aos="fade-up" data-aos-delay="200">
                            <i class="fas fa-envelope"></i>
                            <p>{"contact@dren-betsiboka.mg"}</p>
                        </div>
                    </div>
                </div>
            </section>

            <footer class="footer">
                <div class="container">
                    <p>{"© 2024 DREN Betsiboka. Tous droits réservés."}</p>
                </div>
            </footer>
        </div>
    }
}
