use actix_web::web;

pub mod admin;
pub mod backend_health;
pub mod league;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(backend_health::backend_health);

    // Public league reads
    cfg.service(
        web::scope("/league")
            .service(league::get_ranked_teams)
            .service(league::get_team_info)
            .service(league::get_fixtures)
            .service(league::get_leaderboard)
            .service(league::list_teams_of_week)
            .service(league::get_team_of_week),
    );

    // Admin mutations
    admin::init_admin_routes(cfg);
}
