use super::*;

pub static EN: Content = Content {
    brand: Brand {
        name: "SALEM BALLAMA",
        tagline: "Auditing & Advisory",
    },
    nav: Nav {
        home: "Home",
        services: "Services",
        about: "About",
        expertise: "Expertise",
        contact: "Contact",
        cta: "Free Consultation",
        quote: "Get a Quote",
        menu: "Menu",
    },
    hero: Hero {
        established: "Established in 1998 in Abu Dhabi",
        title1: "Integrity in Every",
        title1_highlight: "Figure.",
        title2: "Clarity in Every",
        title2_highlight: "Decision.",
        desc: "We provide world-class auditing, judicial expertise, and corporate restructuring services. Empowering UAE businesses with financial transparency and strategic foresight.",
        btn_service: "Our Services",
        btn_about: "About The Firm",
    },
    stats: &[
        Stat { number: "25+", label: "Years Experience" },
        Stat { number: "500+", label: "Corporate Clients" },
        Stat { number: "100%", label: "UAE Compliance" },
        Stat { number: "10K+", label: "Assets Audited" },
    ],
    services: Services {
        header: "Our Expertise",
        title: "Comprehensive Financial Solutions",
        desc: "From statutory audits to complex corporate restructuring, we deliver precision and compliance tailored to the UAE market.",
        items: &[
            ServiceItem {
                title: "Auditing & Assurance",
                desc: "Statutory audits, internal audits, and risk assessment services designed to provide stakeholders with absolute confidence.",
            },
            ServiceItem {
                title: "Judicial Expertise",
                desc: "Court-appointed financial expertise, arbitration support, and dispute resolution services recognized by UAE courts.",
            },
            ServiceItem {
                title: "Financial Restructuring",
                desc: "Turnaround strategies for distressed entities, including bankruptcy procedures and liquidation management.",
            },
            ServiceItem {
                title: "VAT & Tax Consultancy",
                desc: "Navigating the evolving UAE tax landscape with expert VAT filing, corporate tax planning, and compliance checks.",
            },
            ServiceItem {
                title: "Business Setup",
                desc: "End-to-end support for company formation, feasibility studies, and licensing across Dubai and Abu Dhabi.",
            },
            ServiceItem {
                title: "Bookkeeping & HR",
                desc: "Outsourced accounting, payroll management, and CFO services to streamline your daily operations.",
            },
        ],
        learn_more: "Learn more",
        estimate_tax: "Estimate corporate tax",
    },
    about: About {
        title: "A Legacy of Financial Leadership",
        intro: "Established in 1998, Salem Ballama Auditing of Accounts has grown into one of the UAE's most respected financial institutions.",
        desc: "Under the leadership of Mr. Mohammed Salem Ballama, a distinguished chairman of court-appointed trustee panels, we specialize in high-stakes financial restructuring and advisory. Our firm was pivotal in the restructuring of major entities like the KBBO Group, proving our capability to handle complex financial landscapes with integrity.",
        quote1: "Trust is our",
        quote2: "greatest asset.",
        chairman_name: "Mr. Salem Ballama Al Tamimi",
        role: "Chairman & Director",
        expertise_title: "Why clients choose us",
        points: &[
            "ISO Certified Operations",
            "Approved by UAE Ministry of Justice",
            "Experts in UAE Bankruptcy Law",
            "Multilingual Team (Arabic & English)",
        ],
    },
    team: Team {
        header: "Our People",
        title: "Meet the Partners",
        desc: "Seasoned auditors, court-appointed experts and tax advisors working side by side on every engagement.",
        view_profile: "View profile",
        back: "Back to the team",
        expertise_title: "Areas of expertise",
        members: &[
            TeamMember {
                id: "salem",
                name: "Salem Ballama Al Tamimi",
                role: "Chairman & Director",
                image: "/salempic.png",
                bio: "Founder of the firm in 1998, Salem has led statutory audits and court-appointed reviews for family groups, listed companies and government entities across the Emirates for more than twenty-five years.",
                expertise: &[
                    "Statutory audit",
                    "Court-appointed expertise",
                    "Corporate governance",
                ],
            },
            TeamMember {
                id: "mohammed",
                name: "Mohammed Salem Ballama",
                role: "Managing Partner, Restructuring",
                image: "/team/mohammed.png",
                bio: "Mohammed chairs court-appointed trustee panels and led the firm's work on the KBBO Group restructuring. He advises creditors and boards through bankruptcy and liquidation proceedings.",
                expertise: &[
                    "UAE Bankruptcy Law",
                    "Trustee panels",
                    "Liquidation management",
                ],
            },
            TeamMember {
                id: "rana",
                name: "Rana Al Haddad",
                role: "Head of Tax & VAT",
                image: "/team/rana.png",
                bio: "Rana heads the tax practice, guiding clients through VAT registration, corporate tax readiness and Federal Tax Authority audits.",
                expertise: &[
                    "Corporate tax planning",
                    "VAT compliance",
                    "Tax authority audits",
                ],
            },
            TeamMember {
                id: "omar",
                name: "Omar Khalil",
                role: "Audit Partner",
                image: "/team/omar.png",
                bio: "Omar runs the assurance team and oversees internal audit and risk assessment engagements for mid-sized companies in Dubai and Abu Dhabi.",
                expertise: &[
                    "Internal audit",
                    "Risk assessment",
                    "IFRS reporting",
                ],
            },
        ],
    },
    tax: TaxText {
        header: "UAE Corporate Tax",
        title: "Corporate Tax Estimator",
        desc: "Enter your annual net profit to see how the UAE corporate tax applies to your business.",
        rule_exempt: "Profit up to the threshold is taxed at 0%",
        rule_taxable: "Profit above the threshold is taxed at",
        input_label: "Annual net profit (AED)",
        placeholder: "e.g. 500,000",
        calculate: "Calculate",
        result_title: "Your estimate",
        total_profit: "Total profit",
        exempt_amount: "Exempt amount",
        taxable_amount: "Taxable amount",
        tax_due: "Corporate tax due",
        empty_hint: "Enter an amount and press Calculate.",
        disclaimer: "This estimate is for guidance only and does not account for exemptions, reliefs or free zone status. Contact us for a full assessment.",
        back: "Back to services",
    },
    contact: Contact {
        title: "Let's Discuss Your Financial Future",
        desc: "Whether you require a statutory audit, tax advice, or complex restructuring support, our experts are ready to assist.",
        labels: ContactLabels {
            head_office: "Head Office",
            phone: "Phone",
            email: "Email",
            form_title: "Request a Callback",
            first_name: "First Name",
            last_name: "Last Name",
            company: "Company Name",
            service: "Service Required",
            message: "Message",
            submit: "Submit Request",
        },
        placeholders: ContactPlaceholders {
            first_name: "John",
            last_name: "Doe",
            company: "Your Business Ltd",
            message: "How can we help you?",
        },
        options: &[
            "Auditing & Assurance",
            "Tax & VAT Consultancy",
            "Judicial Expertise",
            "Business Restructuring",
            "Other",
        ],
        mail_subject: "Callback request",
    },
    footer: Footer {
        rights: "Salem Ballama Auditing of Accounts. All Rights Reserved.",
        tagline: "Designed for Excellence in UAE.",
    },
};
