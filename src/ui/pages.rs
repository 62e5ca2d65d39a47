//! Static marketing views: home, news & events, partners, testimonials.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

pub fn render_home(f: &mut Frame, area: Rect) {
    let paragraph = Paragraph::new(vec![
        Line::from(Span::styled(
            "Your Gateway to Tech Excellence",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Connecting ambitious Nigerian university students with transformative"),
        Line::from("internship opportunities at leading tech companies."),
        Line::from(""),
        Line::from(vec![
            Span::styled("🎓 I'm a Student", Style::default().fg(Color::Green)),
            Span::raw("  — open the Apply tab to submit your application"),
        ]),
        Line::from(vec![
            Span::styled("🏢 I'm a Company", Style::default().fg(Color::Yellow)),
            Span::raw("  — open the Companies tab to post an opportunity"),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "How It Works",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from("  1. Apply — tell us about yourself and pick a track"),
        Line::from("  2. Get matched — we connect you with vetted companies"),
        Line::from("  3. Start your internship — grow with mentorship and support"),
        Line::from(""),
        Line::from("Why Tech Compass:"),
        Line::from("  • Targeted Matching — opportunities that match your skills and career goals"),
        Line::from("  • Fast & Efficient — matched within days, not months"),
        Line::from("  • Verified Companies — every partner is vetted for quality"),
        Line::from("  • Career Growth — resources, mentorship and support"),
    ])
    .wrap(Wrap { trim: false })
    .block(Block::default().borders(Borders::ALL).title("🧭 Tech Compass"));

    f.render_widget(paragraph, area);
}

pub fn render_news(f: &mut Frame, area: Rect) {
    let items = vec![
        ListItem::new("📅 Upcoming Sessions"),
        ListItem::new(""),
        ListItem::new("  • Initiative Unveiling"),
        ListItem::new("  • Software Costing & Project Management"),
        ListItem::new("  • Resume Workshop"),
        ListItem::new("  • System Design & Architecture"),
        ListItem::new("  • Networking Session"),
        ListItem::new(""),
        ListItem::new("🎤 Featured Speakers"),
        ListItem::new(""),
        ListItem::new("  • Olorunfemi Oluwaniran — Chief Technical Officer, AWA Bike"),
        ListItem::new("  • Oluwatosin Adesua — Senior System Engineer, Interswitch Group"),
        ListItem::new("  • Dr. Khadijat Ladoja — Founder & Pioneer, Tech Compass"),
    ];

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("📰 News & Events"))
        .style(Style::default().fg(Color::White));

    f.render_widget(list, area);
}

pub fn render_partners(f: &mut Frame, area: Rect) {
    let items = vec![
        ListItem::new("🤝 Partner Companies"),
        ListItem::new(""),
        ListItem::new("  • Hyperspace — Tech Solutions"),
        ListItem::new("  • Crop2Cash — Agritech"),
        ListItem::new("  • Deimos — Tech Innovation"),
        ListItem::new("  • GMind AI — Artificial Intelligence"),
        ListItem::new("  • Octave Analytics — Data Analytics"),
        ListItem::new("  • Solab Technologies — Technology"),
        ListItem::new("  • Tombell Education — EdTech"),
        ListItem::new(""),
        ListItem::new("Why partner with us:"),
        ListItem::new("  • Pre-Screened Talent"),
        ListItem::new("  • Cost-Effective Hiring"),
        ListItem::new("  • Brand Visibility"),
        ListItem::new("  • Community Impact"),
        ListItem::new("  • Growth Opportunities"),
        ListItem::new("  • Flexible Engagement"),
    ];

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("🤝 Partners"))
        .style(Style::default().fg(Color::White));

    f.render_widget(list, area);
}

pub fn render_testimonials(f: &mut Frame, area: Rect) {
    let paragraph = Paragraph::new(vec![
        Line::from(Span::styled(
            "What students and companies say",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("\"Tech Compass connected me with an amazing internship opportunity at"),
        Line::from("TechCorp. The experience I gained was invaluable, and I'm now a"),
        Line::from("full-time software engineer there!\""),
        Line::from(Span::styled(
            "  — Adebayo Johnson, Software Engineering Intern, TechCorp Nigeria",
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from("\"I never thought finding an internship would be this easy. Tech Compass"),
        Line::from("matched me with a company that aligned perfectly with my career goals.\""),
        Line::from(Span::styled(
            "  — Chioma Okafor, Data Science Intern, DataFlow Solutions",
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from("\"We've hired 5 interns through Tech Compass and each one has been"),
        Line::from("exceptional. The platform makes it incredibly easy to find talented,"),
        Line::from("motivated students.\""),
        Line::from(Span::styled(
            "  — Oluwaseun Adeyemi, HR Manager, InnovateTech Ltd",
            Style::default().fg(Color::Gray),
        )),
    ])
    .wrap(Wrap { trim: false })
    .block(Block::default().borders(Borders::ALL).title("💬 Testimonials"));

    f.render_widget(paragraph, area);
}
