//! Terminal rendering of daily cards, week tables and month reports.

use crate::config::Config;
use crate::models::account::UserAccount;
use crate::models::apportionment::{MonthlyApportionment, WeeklyHours};
use crate::models::daily_hours::DailyHours;
use crate::models::event::PunchEvent;
use crate::ui::chart::bar_chart;
use crate::ui::messages::{header, info, metric, warning};
use crate::utils::date::{month_name, weekday_short};
use crate::utils::formatting::hours2readable;
use crate::utils::table::{Column, Table};
use crate::utils::time::format_time;
use chrono::NaiveDate;

fn hours(h: f64, cfg: &Config) -> String {
    format!("{:.prec$}h", h, prec = cfg.hours_decimals)
}

fn date_label(d: NaiveDate, cfg: &Config) -> String {
    if cfg.show_weekday {
        format!("{} ({})", d.format("%Y-%m-%d"), weekday_short(d))
    } else {
        d.format("%Y-%m-%d").to_string()
    }
}

pub fn print_events(events: &[PunchEvent], cfg: &Config) {
    if events.is_empty() {
        info("No punches recorded.");
        return;
    }

    let mut table = Table::new(
        vec![
            Column::right("id"),
            Column::left("date"),
            Column::left("kind"),
            Column::left("time"),
        ],
        &cfg.separator_char,
    );
    for ev in events {
        table.add_row(vec![
            ev.id.to_string(),
            ev.date_str(),
            ev.kind.ek_as_str(),
            ev.time_str(),
        ]);
    }
    print!("{}", table.render());
}

pub fn print_day(account: &UserAccount, date: NaiveDate, day: &DailyHours, cfg: &Config) {
    header(format!("{} · {}", account.display_name, date_label(date, cfg)));

    if day.is_empty() {
        info(format!("No punches for {date}."));
        metric("Total", hours(0.0, cfg));
        return;
    }

    let mut table = Table::new(vec![Column::left("punch"), Column::left("time")], &cfg.separator_char);
    table.add_row(vec!["Entry".into(), format_time(day.entry)]);
    table.add_row(vec!["Lunch out".into(), format_time(day.lunch_out)]);
    table.add_row(vec!["Lunch in".into(), format_time(day.lunch_in)]);
    table.add_row(vec!["Exit".into(), format_time(day.exit)]);
    for (kind, t) in &day.extras {
        table.add_row(vec![kind.label(), format_time(Some(*t))]);
    }
    print!("{}", table.render());

    metric(
        "Lunch",
        format!("{} ({})", hours(day.lunch_hours, cfg), hours2readable(day.lunch_hours)),
    );
    metric(
        "Total",
        format!("{} ({})", hours(day.total_hours, cfg), hours2readable(day.total_hours)),
    );

    for anomaly in day.anomalies() {
        warning(anomaly.describe());
    }
}

pub fn print_week(week: &WeeklyHours, cfg: &Config) {
    header(format!("Week from {}", week.week_start.format("%Y-%m-%d")));

    if week.days.is_empty() {
        info("No punches this week.");
        metric("Total this week", hours(0.0, cfg));
        return;
    }

    let mut table = Table::new(
        vec![
            Column::left("date"),
            Column::left("entry"),
            Column::left("lunch_out"),
            Column::left("lunch_in"),
            Column::left("exit"),
            Column::right("lunch"),
            Column::right("total"),
        ],
        &cfg.separator_char,
    );
    for (d, day) in &week.days {
        table.add_row(vec![
            date_label(*d, cfg),
            format_time(day.entry),
            format_time(day.lunch_out),
            format_time(day.lunch_in),
            format_time(day.exit),
            hours(day.lunch_hours, cfg),
            hours(day.total_hours, cfg),
        ]);
    }
    print!("{}", table.render());

    let bars: Vec<(String, f64)> = week
        .days
        .iter()
        .map(|(d, day)| (weekday_short(*d).to_string(), day.total_hours))
        .collect();
    print!("{}", bar_chart(&bars, cfg.chart_width, cfg.hours_decimals));

    metric("Total this week", hours(week.total_hours, cfg));
}

pub fn print_month(account: &UserAccount, m: &MonthlyApportionment, cfg: &Config) {
    header(format!(
        "{} · {} {}",
        account.display_name,
        month_name(m.month),
        m.year
    ));

    if !m.has_data() {
        info(format!("No hours recorded for {} {}.", month_name(m.month), m.year));
        return;
    }

    let bars: Vec<(String, f64)> = m
        .days
        .iter()
        .map(|(d, h)| (d.format("%d").to_string(), *h))
        .collect();
    print!("{}", bar_chart(&bars, cfg.chart_width, cfg.hours_decimals));

    metric(
        "Total this month",
        format!("{} ({})", hours(m.total_hours, cfg), hours2readable(m.total_hours)),
    );

    if m.contracts.is_empty() {
        info("No contract shares configured for this account.");
        return;
    }

    let mut table = Table::new(
        vec![
            Column::left("contract"),
            Column::right("share"),
            Column::right("hours"),
        ],
        &cfg.separator_char,
    );
    for (name, c) in &m.contracts {
        table.add_row(vec![
            name.clone(),
            format!("{}%", c.percentage),
            hours(c.hours, cfg),
        ]);
    }
    print!("{}", table.render());
}

pub fn print_account(account: &UserAccount) {
    header(&account.display_name);
    println!("username : {}", account.username);
    println!("role     : {}", account.role_title);
    for (name, pct) in &account.contract_shares {
        println!("contract : {name} ({pct}%)");
    }
}
